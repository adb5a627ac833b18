use clap::Parser;
use std::error::Error;
use std::process::exit;
use sweeper_bench::args::ArgRange;
use sweeper_bench::drive::{self, RunFlags};
use sweeper_bench::preset;

/// Times the blocking and lock-free list implementations across thread and
/// operation counts.
#[derive(Parser, Debug)]
#[command(name = "list_sweep", version)]
struct Cli {
    /// Java launcher
    #[arg(long, default_value = preset::JAVA)]
    java: String,

    /// Benchmark jar
    #[arg(long, default_value = preset::JAR)]
    jar: String,

    /// Thread counts, used for both readers and writers
    #[arg(long, default_value = preset::THREADS)]
    threads: ArgRange,

    /// Operations per thread
    #[arg(long, default_value = preset::OPS)]
    ops: ArgRange,

    /// List types: 0 for blocking, 1 for lock-free
    #[arg(long, default_value = preset::MODES)]
    modes: ArgRange,

    #[command(flatten)]
    flags: RunFlags,
}

fn main() {
    env_logger::init();
    if let Err(err) = list_sweep() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}

fn list_sweep() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let template = preset::list_template(&cli.java, &cli.jar)?;
    let axes = preset::list_axes(cli.threads, cli.ops, cli.modes);
    drive::drive(template, axes, &cli.flags)?;
    Ok(())
}
