use crate::invocation::Invocation;
use std::io;
use std::process::Stdio;
use std::str::FromStr;

/// What becomes of a child's standard output. Standard error is always passed
/// through, since that is where timing wrappers report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capture {
    #[default]
    Discard,
    Retain,
    Inherit,
}

impl FromStr for Capture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discard" => Ok(Self::Discard),
            "retain" => Ok(Self::Retain),
            "inherit" => Ok(Self::Inherit),
            _ => Err(format!("unknown capture policy '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    /// `None` if the child was terminated by a signal.
    pub code: Option<i32>,
    /// Present only under [`Capture::Retain`].
    pub stdout: Option<Vec<u8>>,
}

impl Exit {
    #[inline]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Starts an invocation and blocks until it terminates.
pub trait Launcher {
    fn launch(&self, invocation: &Invocation, capture: Capture) -> io::Result<Exit>;
}

impl<L: Launcher + ?Sized> Launcher for &L {
    fn launch(&self, invocation: &Invocation, capture: Capture) -> io::Result<Exit> {
        (**self).launch(invocation, capture)
    }
}

/// Runs invocations as OS child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&self, invocation: &Invocation, capture: Capture) -> io::Result<Exit> {
        let mut command = invocation.to_command();
        command.stderr(Stdio::inherit());
        match capture {
            Capture::Discard | Capture::Inherit => {
                command.stdout(if capture == Capture::Discard {
                    Stdio::null()
                } else {
                    Stdio::inherit()
                });
                let status = command.status()?;
                Ok(Exit {
                    code: status.code(),
                    stdout: None,
                })
            }
            Capture::Retain => {
                command.stdout(Stdio::piped());
                let output = command.output()?;
                Ok(Exit {
                    code: output.status.code(),
                    stdout: Some(output.stdout),
                })
            }
        }
    }
}
