//! Printing of the sweep as a table, one row per invocation.

use std::fmt::{Display, Formatter};
use std::time::Duration;
use sweeper::invocation::Invocation;
use sweeper::runner::{Execution, Observer, Report};

#[derive(Debug)]
pub struct Seconds(pub Duration);

impl Display for Seconds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut unaligned = format!("{:.3} s", self.0.as_secs_f64());
        if let Some(width) = f.width() {
            while unaligned.len() < width {
                unaligned.insert(0, ' ');
            }
        }
        f.write_str(&unaligned)
    }
}

/// The axis values of an invocation, e.g. `threads=8 ops=10 mode=1`.
pub struct PointLabel<'a>(pub &'a Invocation);

impl Display for PointLabel<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = self
            .0
            .point()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join(" ");
        match f.width() {
            Some(width) => write!(f, "{:width$}", label),
            None => f.write_str(&label),
        }
    }
}

pub struct Separator();

impl Display for Separator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "|{:->6}|{:->50}|{:->8}|{:->14}|", "", "", "", "")
    }
}

pub struct Header();

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "|{:>6}|{:50}|{:>8}|{:>14}|", "#", "point", "exit", "elapsed")
    }
}

pub struct Row<'a>(pub &'a Execution);

impl Display for Row<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let execution = self.0;
        write!(
            f,
            "|{:>6}|{:50}|{:>8}|{:>14}|",
            execution.invocation.index(),
            PointLabel(&execution.invocation),
            execution.code.map_or(String::from("signal"), |code| code.to_string()),
            Seconds(execution.elapsed)
        )
    }
}

pub struct PlanHeader();

impl Display for PlanHeader {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "|{:>6}|{}", "#", "command")
    }
}

/// A row of a dry run: the command line that would be executed.
pub struct Planned<'a>(pub &'a Invocation);

impl Display for Planned<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "|{:>6}|{}", self.0.index(), self.0)
    }
}

pub struct Footer<'a>(pub &'a Report);

impl Display for Footer<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "|{:>6}|{:50}|{:>8}|{:>14}|",
            self.0.len(),
            "invocations",
            "",
            Seconds(self.0.elapsed)
        )
    }
}

/// Prints a row as each invocation completes.
pub struct Table();

impl Observer for Table {
    fn on_complete(&mut self, execution: &Execution) {
        println!("{}", Row(execution));
    }
}

#[cfg(test)]
mod tests;
