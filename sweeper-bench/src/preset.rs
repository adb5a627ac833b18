//! The thread-safe list benchmark sweep.
//!
//! The benchmark jar takes `<readers> <writers> <operations> <list type>`,
//! where list type 0 selects the blocking list and anything else the lock-free
//! one. Readers and writers are both set to the thread count.

use crate::args::ArgRange;
use sweeper::axis::Axis;
use sweeper::error::SweepError;
use sweeper::template::{escape, Template};

pub const JAVA: &str = "java";
pub const JAR: &str = "lock-free.jar";
pub const THREADS: &str = "2,8,16";
pub const OPS: &str = "1000000,10000000";
pub const MODES: &str = "0,1";

pub fn list_template(java: &str, jar: &str) -> Result<Template, SweepError> {
    Template::new(
        java,
        [
            "-jar".to_string(),
            escape(jar),
            "{threads}".into(),
            "{threads}".into(),
            "{ops}".into(),
            "{mode}".into(),
        ],
    )
}

pub fn list_axes(threads: ArgRange, ops: ArgRange, modes: ArgRange) -> Vec<Axis> {
    vec![
        threads.into_axis("threads"),
        ops.into_axis("ops"),
        modes.into_axis("mode"),
    ]
}
