use crate::template::Template;

pub const GNU_TIME: &str = "/usr/bin/time";

/// GNU `time` format printing elapsed wall-clock seconds.
pub const ELAPSED_SECONDS: &str = "%e";

/// An external program that runs another program and reports how long it took,
/// typically on its standard error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingWrapper {
    program: String,
    flags: Vec<String>,
}

impl TimingWrapper {
    pub fn new<P, I, S>(program: P, flags: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            flags: flags.into_iter().map(Into::into).collect(),
        }
    }

    /// `/usr/bin/time -f <format>`.
    pub fn gnu_time(format: &str) -> Self {
        Self::new(GNU_TIME, ["-f", format])
    }

    #[inline]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[inline]
    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn wrap(&self, template: &Template) -> Template {
        template.prefixed(&self.program, &self.flags)
    }
}

impl Default for TimingWrapper {
    fn default() -> Self {
        Self::gnu_time(ELAPSED_SECONDS)
    }
}
