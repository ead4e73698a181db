use log::debug;

/// Read access to the host's command-line switches.
pub trait CommandLine {
    /// Value of `-Name:Value`, `-Name=Value` or `/Name:Value`. A bare `-Name`
    /// yields an empty value. Names compare case-insensitively.
    fn switch_value(&self, name: &str) -> Option<String>;
}

/// Switches of the current process. The extension runs inside the host, so
/// these are the host's own arguments.
pub struct ProcessCommandLine {
    args: Vec<String>,
}

impl ProcessCommandLine {
    pub fn new() -> Self {
        Self::from_args(std::env::args_os().map(|a| a.to_string_lossy().into_owned()))
    }

    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        debug!("Command line arguments: {:?}", args);
        Self { args }
    }
}

impl Default for ProcessCommandLine {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLine for ProcessCommandLine {
    fn switch_value(&self, name: &str) -> Option<String> {
        self.args
            .iter()
            .find_map(|arg| parse_switch(arg, name))
            .map(str::to_string)
    }
}

fn parse_switch<'a>(arg: &'a str, name: &str) -> Option<&'a str> {
    let body = arg.strip_prefix('-').or_else(|| arg.strip_prefix('/'))?;

    let (switch, value) = match body.find([':', '=']) {
        Some(idx) => (&body[..idx], &body[idx + 1..]),
        None => (body, ""),
    };

    switch.eq_ignore_ascii_case(name).then_some(value)
}
