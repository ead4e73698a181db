use crate::common::Settings;
use crate::runner::cmdline::CommandLine;
use crate::service::apply::{Outcome, apply_priority, report};
use crate::service::process::{PrioritySetter, SystemPriority};
use log::debug;

/// Identifier the host uses to register this extension.
pub const DIRECTOR_ID: u32 = 0x04E4_C618;

/// Capabilities the host expects from a loaded extension.
pub trait Director {
    fn director_id(&self) -> u32;

    /// Called once after the extension has been loaded. Returning `false`
    /// would make the host abort its startup.
    fn on_start(&mut self, cmdline: &dyn CommandLine) -> bool;
}

/// Extends the host's `-CPUPriority` switch with more values.
pub struct CpuPriorityDirector<S: PrioritySetter = SystemPriority> {
    switch_name: String,
    setter: S,
}

impl CpuPriorityDirector {
    pub fn new(settings: &Settings) -> Self {
        Self::with_setter(settings, SystemPriority)
    }
}

impl<S: PrioritySetter> CpuPriorityDirector<S> {
    pub fn with_setter(settings: &Settings, setter: S) -> Self {
        Self {
            switch_name: settings.switch_name.clone(),
            setter,
        }
    }

    /// Look up the switch and apply it, logging the outcome.
    pub fn run(&self, cmdline: &dyn CommandLine) -> Outcome {
        let value = cmdline.switch_value(&self.switch_name);
        debug!("-{} value: {:?}", self.switch_name, value);

        let outcome = apply_priority(&self.switch_name, value.as_deref(), &self.setter);
        report(&outcome);
        outcome
    }
}

impl<S: PrioritySetter> Director for CpuPriorityDirector<S> {
    fn director_id(&self) -> u32 {
        DIRECTOR_ID
    }

    fn on_start(&mut self, cmdline: &dyn CommandLine) -> bool {
        // The priority is auxiliary, the host must start regardless.
        self.run(cmdline);
        true
    }
}
