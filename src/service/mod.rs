pub mod apply;
pub mod priority;
pub mod process;

pub use apply::{Outcome, apply_priority, report};
pub use priority::{PriorityClass, PriorityLevel};
pub use process::{PrioritySetter, SystemPriority};
