use crate::common::config::Settings;
use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use std::fmt::Arguments;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Create the log file inside `folder`, install it as the sink of the `log`
/// facade and write the header line. Returns the path of the file.
///
/// The file is truncated on every run. Only one logger can be installed per
/// process: a second call fails before touching any file contents, so the
/// live log is left intact.
pub fn init_file(settings: &Settings, folder: &Path) -> Result<PathBuf> {
    let path = settings.log_file_path(folder);

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&path)
        .with_context(|| format!("Failed to create log file '{}'", path.display()))?;
    // Shares the file offset with the logger's handle.
    let mut header = file.try_clone().context("Failed to duplicate log file handle")?;

    let logger = Builder::new()
        .filter_level(settings.log_level)
        .format(format_log)
        .target(Target::Pipe(Box::new(file)))
        .build();
    let max_level = logger.filter();

    log::set_boxed_logger(Box::new(logger)).context("Failed to install the file logger")?;
    log::set_max_level(max_level);

    header.set_len(0).context("Failed to truncate log file")?;
    writeln!(header, "{}", settings.log_header).context("Failed to write log file header")?;

    Ok(path)
}

fn format_log(buf: &mut env_logger::fmt::Formatter, record: &log::Record) -> std::io::Result<()> {
    let time = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    write_line(buf, &time, record.level(), record.args())
}

/// One log line: timestamp, level padded to five characters, message.
fn write_line<W: Write + ?Sized>(
    out: &mut W,
    time: &dyn std::fmt::Display,
    level: log::Level,
    message: &Arguments<'_>,
) -> std::io::Result<()> {
    writeln!(out, "{} {:<5} {}", time, level, message)
}
