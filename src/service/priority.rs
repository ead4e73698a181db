use phf::phf_map;
use std::fmt;

/// Scheduling classes the extension can apply to the host process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityClass {
    Idle,
    BelowNormal,
    Normal,
    AboveNormal,
    High,
}

/// Result of resolving a `-CPUPriority` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityLevel {
    Class(PriorityClass),
    /// Already applied by the host before extensions are loaded.
    Low,
    Unsupported(String),
}

// Keys are ASCII lower case, lookups fold the token the same way.
static LEVELS: phf::Map<&'static str, PriorityLevel> = phf_map! {
    "high" => PriorityLevel::Class(PriorityClass::High),
    "abovenormal" => PriorityLevel::Class(PriorityClass::AboveNormal),
    "normal" => PriorityLevel::Class(PriorityClass::Normal),
    "belownormal" => PriorityLevel::Class(PriorityClass::BelowNormal),
    "idle" => PriorityLevel::Class(PriorityClass::Idle),
    "low" => PriorityLevel::Low,
};

impl PriorityLevel {
    /// Case-insensitive lookup of a switch value. Anything outside the known
    /// names, the empty string included, is `Unsupported`.
    pub fn resolve(token: &str) -> Self {
        LEVELS
            .get(token.to_ascii_lowercase().as_str())
            .cloned()
            .unwrap_or_else(|| PriorityLevel::Unsupported(token.to_string()))
    }
}

impl PriorityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityClass::Idle => "Idle",
            PriorityClass::BelowNormal => "BelowNormal",
            PriorityClass::Normal => "Normal",
            PriorityClass::AboveNormal => "AboveNormal",
            PriorityClass::High => "High",
        }
    }

    /// `dwPriorityClass` value accepted by `SetPriorityClass`.
    pub fn windows_class(&self) -> u32 {
        match self {
            PriorityClass::Idle => 0x0000_0040,
            PriorityClass::BelowNormal => 0x0000_4000,
            PriorityClass::Normal => 0x0000_0020,
            PriorityClass::AboveNormal => 0x0000_8000,
            PriorityClass::High => 0x0000_0080,
        }
    }

    /// Nice value used where the OS has no priority classes.
    pub fn nice_value(&self) -> i32 {
        match self {
            PriorityClass::Idle => 19,
            PriorityClass::BelowNormal => 5,
            PriorityClass::Normal => 0,
            PriorityClass::AboveNormal => -5,
            PriorityClass::High => -10,
        }
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
