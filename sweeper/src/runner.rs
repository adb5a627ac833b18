//! The sweep runner: executes every invocation of a sweep, one at a time.
//!
//! Invocations never overlap. Each child is started only after the previous
//! one has exited, and the first failure aborts the rest of the sweep.

use crate::error::SweepError;
use crate::invocation::Invocation;
use crate::launch::{Capture, Launcher, ProcessLauncher};
use crate::sweep::Sweep;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub capture: Capture,
}

/// A completed invocation.
#[derive(Debug, Clone)]
pub struct Execution {
    pub invocation: Invocation,
    pub code: Option<i32>,
    pub stdout: Option<Vec<u8>>,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct Report {
    pub executions: Vec<Execution>,
    pub elapsed: Duration,
}

impl Report {
    pub fn len(&self) -> usize {
        self.executions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executions.is_empty()
    }
}

/// Hooks into the progress of a run.
pub trait Observer {
    fn on_launch(&mut self, _invocation: &Invocation) {}

    /// Called for every child that ran to completion, including the one that
    /// failed the sweep.
    fn on_complete(&mut self, _execution: &Execution) {}
}

impl Observer for () {}

pub struct Runner<L: Launcher = ProcessLauncher> {
    sweep: Sweep,
    launcher: L,
    options: Options,
}

impl Runner {
    pub fn new(sweep: Sweep, options: Options) -> Self {
        Self::with_launcher(sweep, ProcessLauncher, options)
    }
}

impl<L: Launcher> Runner<L> {
    pub fn with_launcher(sweep: Sweep, launcher: L, options: Options) -> Self {
        Self {
            sweep,
            launcher,
            options,
        }
    }

    #[inline]
    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The invocations a run would execute, in order, without executing any.
    pub fn plan(&self) -> Vec<Invocation> {
        self.sweep.invocations().collect()
    }

    pub fn run(&self) -> Result<Report, SweepError> {
        self.run_observed(&mut ())
    }

    pub fn run_observed<O: Observer>(&self, observer: &mut O) -> Result<Report, SweepError> {
        self.execute_all(self.sweep.invocations(), observer)
    }

    /// Runs the single invocation at `index`.
    pub fn run_only<O: Observer>(&self, index: usize, observer: &mut O) -> Result<Report, SweepError> {
        let invocation = self.sweep.invocation(index)?;
        self.execute_all([invocation], observer)
    }

    fn execute_all<I, O>(&self, invocations: I, observer: &mut O) -> Result<Report, SweepError>
    where
        I: IntoIterator<Item = Invocation>,
        O: Observer,
    {
        let start_time = Instant::now();
        let mut executions = Vec::new();
        for invocation in invocations {
            let execution = self.execute(invocation, observer)?;
            executions.push(execution);
        }
        let elapsed = Instant::now() - start_time;
        info!("sweep of {} invocations completed in {:?}", executions.len(), elapsed);
        Ok(Report {
            executions,
            elapsed,
        })
    }

    fn execute<O: Observer>(&self, invocation: Invocation, observer: &mut O) -> Result<Execution, SweepError> {
        debug!("launching #{}: {}", invocation.index(), invocation);
        observer.on_launch(&invocation);

        let start_time = Instant::now();
        let exit = match self.launcher.launch(&invocation, self.options.capture) {
            Ok(exit) => exit,
            Err(source) => {
                warn!("could not launch #{}: {}", invocation.index(), source);
                return Err(SweepError::LaunchFailure {
                    command: invocation.command_line(),
                    source,
                });
            }
        };
        let elapsed = Instant::now() - start_time;

        let success = exit.success();
        let execution = Execution {
            invocation,
            code: exit.code,
            stdout: exit.stdout,
            elapsed,
        };
        observer.on_complete(&execution);

        if success {
            info!("#{} completed in {:?}", execution.invocation.index(), elapsed);
            Ok(execution)
        } else {
            warn!(
                "#{} failed with code {:?}, abandoning sweep",
                execution.invocation.index(),
                execution.code
            );
            Err(SweepError::ChildProcessFailure {
                command: execution.invocation.command_line(),
                code: execution.code,
            })
        }
    }
}
