//! Stand-in for the host: runs the extension's startup hook against this
//! process's own command line, e.g. `sc4-cpu-priority -CPUPriority:High`.
//! The log is written beside the executable.

use log::LevelFilter;
use sc4_cpu_priority::common::Settings;
use sc4_cpu_priority::runner::{CommandLine, ProcessCommandLine, ffi};
use std::process;
use std::str::FromStr;

fn main() {
    let cmdline = ProcessCommandLine::new();
    let mut settings = Settings::default();

    if let Some(level) = cmdline.switch_value("LogLevel") {
        match LevelFilter::from_str(&level) {
            Ok(level) => settings = settings.with_log_level(level),
            Err(_) => {
                eprintln!("Unknown -LogLevel value: '{}'", level);
                process::exit(2);
            }
        }
    }

    let startup = ffi::start(&settings, &cmdline);

    match &startup.log_file {
        Ok(path) => eprintln!("Log written to {}", path.display()),
        Err(e) => eprintln!("No log file: {:#}", e),
    }

    if !startup.started {
        process::exit(1);
    }
}
