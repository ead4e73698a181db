pub mod common;
pub mod runner;
pub mod service;

pub use runner::director::{CpuPriorityDirector, DIRECTOR_ID, Director};
pub use service::priority::{PriorityClass, PriorityLevel};
