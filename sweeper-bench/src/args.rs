//! Parsing of axis specifications.
//!
//! An axis is given as `NAME=SPEC`, where `SPEC` is either a comma-separated
//! list of values (`2,8,16`) or an inclusive numeric range `START:END[:STEP]`
//! (`2:16:2`).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use sweeper::axis::Axis;

/// Upper bound on the number of values a stepped range may expand to.
pub const MAX_RANGE_LEN: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgError(String);

impl Display for ArgError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for ArgError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgRange {
    List(Vec<String>),
    Stepped { start: u64, end: u64, step: u64 },
}

impl ArgRange {
    pub fn values(&self) -> Vec<String> {
        match self {
            ArgRange::List(values) => values.clone(),
            ArgRange::Stepped { start, end, step } => {
                let mut values = Vec::new();
                let mut current = Some(*start);
                while let Some(value) = current.filter(|value| value <= end) {
                    values.push(value.to_string());
                    current = value.checked_add(*step);
                }
                values
            }
        }
    }

    pub fn into_axis(self, name: &str) -> Axis {
        Axis::new(name, self.values())
    }
}

impl FromStr for ArgRange {
    type Err = ArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(':') {
            let parts = s
                .split(':')
                .map(|part| {
                    u64::from_str(part.trim())
                        .map_err(|err| ArgError(format!("invalid range bound '{part}' in '{s}': {err}")))
                })
                .collect::<Result<Vec<_>, _>>()?;
            let (start, end, step) = match parts[..] {
                [start, end] => (start, end, 1),
                [start, end, step] => (start, end, step),
                _ => return Err(ArgError(format!("range '{s}' must be START:END or START:END:STEP"))),
            };
            if step == 0 {
                return Err(ArgError(format!("range '{s}' has a zero step")));
            }
            if start > end {
                return Err(ArgError(format!("range '{s}' ends before it starts")));
            }
            if (end - start) / step >= MAX_RANGE_LEN {
                return Err(ArgError(format!(
                    "range '{s}' has more than {MAX_RANGE_LEN} values"
                )));
            }
            Ok(ArgRange::Stepped { start, end, step })
        } else {
            let values = s.split(',').map(str::trim).collect::<Vec<_>>();
            if values.iter().any(|value| value.is_empty()) {
                return Err(ArgError(format!("empty value in list '{s}'")));
            }
            Ok(ArgRange::List(values.into_iter().map(String::from).collect()))
        }
    }
}

/// Parses `NAME=SPEC` into an axis.
pub fn parse_axis(s: &str) -> Result<Axis, ArgError> {
    let (name, spec) = s
        .split_once('=')
        .ok_or_else(|| ArgError(format!("axis '{s}' must be NAME=SPEC")))?;
    let name = name.trim();
    if !sweeper::axis::is_valid_name(name) {
        return Err(ArgError(format!("invalid axis name '{name}'")));
    }
    Ok(ArgRange::from_str(spec)?.into_axis(name))
}

#[cfg(test)]
mod tests;
