use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Compiled-in knobs for the extension. There is no configuration file:
/// the host emulator and tests override these through the builder methods.
#[derive(Debug, Clone)]
pub struct Settings {
    pub log_file_name: String,
    pub log_header: String,
    pub log_level: LevelFilter,
    pub switch_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file_name: "SC4CPUPriority.log".to_string(),
            log_header: format!("SC4CPUPriority v{}", env!("CARGO_PKG_VERSION")),
            log_level: LevelFilter::Error,
            switch_name: "CPUPriority".to_string(),
        }
    }
}

impl Settings {
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    /// Full path of the log file when placed in `folder`.
    pub fn log_file_path(&self, folder: &Path) -> PathBuf {
        folder.join(&self.log_file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.log_file_name, "SC4CPUPriority.log");
        assert_eq!(settings.log_level, LevelFilter::Error);
        assert_eq!(settings.switch_name, "CPUPriority");
        assert!(settings.log_header.starts_with("SC4CPUPriority v"));
        assert!(settings.log_header.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_log_level(LevelFilter::Info)
            .with_log_file_name("other.log");

        assert_eq!(settings.log_level, LevelFilter::Info);
        assert_eq!(
            settings.log_file_path(Path::new("plugins")),
            Path::new("plugins").join("other.log")
        );
    }
}
