use crate::print::{Footer, Header, PlanHeader, Planned, Separator, Table};
use clap::Args;
use log::info;
use sweeper::axis::Axis;
use sweeper::error::SweepError;
use sweeper::launch::Capture;
use sweeper::runner::{Options, Report, Runner};
use sweeper::sweep::Sweep;
use sweeper::template::Template;
use sweeper::timing::{TimingWrapper, ELAPSED_SECONDS, GNU_TIME};

/// Flags shared by the sweep binaries.
#[derive(Args, Debug, Clone)]
pub struct RunFlags {
    /// Format passed to the timing wrapper with -f
    #[arg(long, default_value = ELAPSED_SECONDS)]
    pub time_format: String,

    /// Timing wrapper to run each invocation under
    #[arg(long, default_value = GNU_TIME)]
    pub time_program: String,

    /// Run each invocation directly, without a timing wrapper
    #[arg(long)]
    pub no_time: bool,

    /// What to do with each invocation's standard output
    #[arg(long, default_value = "discard", value_name = "discard|retain|inherit")]
    pub capture: Capture,

    /// Print the invocations without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Run only the invocation at this position in the sweep
    #[arg(long, value_name = "INDEX")]
    pub only: Option<usize>,
}

impl Default for RunFlags {
    fn default() -> Self {
        Self {
            time_format: ELAPSED_SECONDS.into(),
            time_program: GNU_TIME.into(),
            no_time: false,
            capture: Capture::default(),
            dry_run: false,
            only: None,
        }
    }
}

impl RunFlags {
    pub fn timing_wrapper(&self) -> Option<TimingWrapper> {
        if self.no_time {
            None
        } else {
            Some(TimingWrapper::new(
                self.time_program.as_str(),
                ["-f", self.time_format.as_str()],
            ))
        }
    }
}

/// Builds the sweep, then either prints its plan or runs it, printing a table
/// row per invocation. Returns the report of a run; `None` for a dry run.
pub fn drive(template: Template, axes: Vec<Axis>, flags: &RunFlags) -> Result<Option<Report>, SweepError> {
    let template = match flags.timing_wrapper() {
        Some(wrapper) => wrapper.wrap(&template),
        None => template,
    };
    let sweep = Sweep::new(template, axes)?;
    info!("{} invocations over {} axes", sweep.len(), sweep.axes().len());
    let runner = Runner::new(
        sweep,
        Options {
            capture: flags.capture,
        },
    );

    println!("{}", Separator());
    if flags.dry_run {
        println!("{}", PlanHeader());
        match flags.only {
            Some(index) => println!("{}", Planned(&runner.sweep().invocation(index)?)),
            None => {
                for invocation in runner.plan() {
                    println!("{}", Planned(&invocation));
                }
            }
        }
        println!("{}", Separator());
        return Ok(None);
    }

    println!("{}", Header());
    println!("{}", Separator());
    let mut table = Table();
    let report = match flags.only {
        Some(index) => runner.run_only(index, &mut table)?,
        None => runner.run_observed(&mut table)?,
    };
    println!("{}", Separator());
    println!("{}", Footer(&report));
    println!("{}", Separator());

    for execution in &report.executions {
        if let Some(stdout) = &execution.stdout {
            println!("#{} {}", execution.invocation.index(), execution.invocation);
            print!("{}", String::from_utf8_lossy(stdout));
        }
    }
    Ok(Some(report))
}
