use crate::service::priority::{PriorityClass, PriorityLevel};
use crate::service::process::PrioritySetter;
use log::{Level, log};
use std::fmt;

/// How a startup call ended. Each outcome is reported as a single log line.
#[derive(Debug)]
pub enum Outcome {
    SwitchAbsent { switch: String },
    AlreadyLow,
    Unsupported { value: String },
    Applied { value: String, class: PriorityClass },
    Failed { class: PriorityClass, error: std::io::Error },
}

/// Resolve the switch value and, for an applicable class, make exactly one
/// call to `setter`. OS failures are returned inside the outcome.
pub fn apply_priority(switch: &str, value: Option<&str>, setter: &dyn PrioritySetter) -> Outcome {
    let Some(value) = value else {
        return Outcome::SwitchAbsent {
            switch: switch.to_string(),
        };
    };

    match PriorityLevel::resolve(value) {
        PriorityLevel::Low => Outcome::AlreadyLow,
        PriorityLevel::Unsupported(value) => Outcome::Unsupported { value },
        PriorityLevel::Class(class) => match setter.set_priority_class(class) {
            Ok(()) => Outcome::Applied {
                value: value.to_string(),
                class,
            },
            Err(error) => Outcome::Failed { class, error },
        },
    }
}

/// Write the outcome to the log.
pub fn report(outcome: &Outcome) {
    log!(outcome.level(), "{}", outcome);
}

impl Outcome {
    pub fn level(&self) -> Level {
        match self {
            Outcome::SwitchAbsent { .. } | Outcome::AlreadyLow | Outcome::Applied { .. } => {
                Level::Info
            }
            Outcome::Unsupported { .. } | Outcome::Failed { .. } => Level::Error,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::SwitchAbsent { switch } => {
                write!(f, "The -{} command line argument was not found.", switch)
            }
            Outcome::AlreadyLow => write!(f, "The game set its CPU priority to Low."),
            Outcome::Unsupported { value } => {
                write!(f, "Unsupported CPU priority value: {}", value)
            }
            Outcome::Applied { value, .. } => {
                write!(f, "Set the game's CPU priority to {}.", value)
            }
            Outcome::Failed { class, error } => write!(
                f,
                "An OS error occurred when setting the CPU priority to {}: {}.",
                class, error
            ),
        }
    }
}
