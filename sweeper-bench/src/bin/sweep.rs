use clap::Parser;
use std::error::Error;
use std::process::exit;
use sweeper::axis::Axis;
use sweeper::template::Template;
use sweeper_bench::args;
use sweeper_bench::drive::{self, RunFlags};

/// Runs a command once for every combination of axis values, one at a time.
///
/// If the command contains no `{name}` placeholders, the axis values are
/// appended to it in axis order. Otherwise each `{name}` is replaced with the
/// current value of the axis called `name`.
#[derive(Parser, Debug)]
#[command(name = "sweep", version)]
struct Cli {
    /// An axis as NAME=V1,V2,... or NAME=START:END[:STEP]; the first axis varies slowest
    #[arg(long = "axis", value_name = "NAME=SPEC", value_parser = args::parse_axis)]
    axes: Vec<Axis>,

    #[command(flatten)]
    flags: RunFlags,

    /// The program to run, followed by its arguments
    #[arg(last = true, required = true, value_name = "COMMAND")]
    command: Vec<String>,
}

fn main() {
    env_logger::init();
    if let Err(err) = sweep() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}

fn sweep() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let (program, args) = cli.command.split_first().ok_or("no command given")?;
    let template = Template::new(program.as_str(), args)?;
    drive::drive(template, cli.axes, &cli.flags)?;
    Ok(())
}
