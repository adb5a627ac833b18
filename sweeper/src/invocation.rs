use std::fmt::{Display, Formatter};
use std::process::Command;

/// A fully-resolved command line for one point of a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    index: usize,
    program: String,
    args: Vec<String>,
    point: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(index: usize, program: String, args: Vec<String>, point: Vec<(String, String)>) -> Self {
        Self {
            index,
            program,
            args,
            point,
        }
    }

    /// Position of this invocation within its sweep, starting at 0.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[inline]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The axis values this invocation was rendered from, in axis order.
    #[inline]
    pub fn point(&self) -> &[(String, String)] {
        &self.point
    }

    pub fn value(&self, axis: &str) -> Option<&str> {
        self.point
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value.as_str())
    }

    /// The command line as a shell would need it typed.
    pub fn command_line(&self) -> String {
        let mut line = quote(&self.program);
        for arg in &self.args {
            line.push(' ');
            line.push_str(&quote(arg));
        }
        line
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl Display for Invocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}

fn quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+%@^".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests;
