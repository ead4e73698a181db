//! C ABI entry points called by the host's loader shim.

use crate::common::{Settings, logging, module_path};
use crate::runner::cmdline::{CommandLine, ProcessCommandLine};
use crate::runner::director::{CpuPriorityDirector, DIRECTOR_ID, Director};
use anyhow::Result;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

#[unsafe(no_mangle)]
pub extern "C" fn cpu_priority_director_id() -> u32 {
    DIRECTOR_ID
}

/// Lifecycle hook. Always reports success, a panic is contained here.
#[unsafe(no_mangle)]
pub extern "C" fn cpu_priority_on_start() -> bool {
    // The host has nowhere to show a log setup error.
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        start(&Settings::default(), &ProcessCommandLine::new())
    }));
    true
}

/// What a startup run did.
#[derive(Debug)]
pub struct Startup {
    /// The log file, or why it could not be set up.
    pub log_file: Result<PathBuf>,
    /// Value returned by the director's hook.
    pub started: bool,
}

/// Open the log beside the module and run the director once.
pub fn start(settings: &Settings, cmdline: &dyn CommandLine) -> Startup {
    start_in(settings, module_path::module_folder(), cmdline)
}

/// Like [`start`] with the log folder already looked up. Without a log file
/// the priority is still applied, just unreported.
pub fn start_in(settings: &Settings, folder: Result<PathBuf>, cmdline: &dyn CommandLine) -> Startup {
    let log_file = folder.and_then(|folder| logging::init_file(settings, &folder));
    let started = CpuPriorityDirector::new(settings).on_start(cmdline);

    Startup { log_file, started }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exported_director_id() {
        assert_eq!(cpu_priority_director_id(), DIRECTOR_ID);
    }

    #[test]
    fn test_start_without_log_folder_still_runs() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-folder");
        let cmdline = ProcessCommandLine::from_args(["game.exe"]);

        let startup = start_in(&Settings::default(), Ok(missing), &cmdline);

        assert!(startup.started);
        let err = startup.log_file.unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }

    #[test]
    fn test_start_when_module_lookup_fails() {
        let cmdline = ProcessCommandLine::from_args(["game.exe", "-CPUPriority:Low"]);

        let startup = start_in(
            &Settings::default(),
            Err(anyhow::anyhow!("dladdr could not resolve the module")),
            &cmdline,
        );

        assert!(startup.started);
        assert!(startup.log_file.is_err());
    }
}
