pub mod config;
pub mod logging;
pub mod module_path;

pub use config::Settings;
