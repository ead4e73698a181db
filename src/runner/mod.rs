pub mod cmdline;
pub mod director;
pub mod ffi;

pub use cmdline::{CommandLine, ProcessCommandLine};
pub use director::{CpuPriorityDirector, Director};
