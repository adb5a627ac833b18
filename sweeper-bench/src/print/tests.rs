use crate::print::{Footer, Header, PlanHeader, Planned, PointLabel, Row, Seconds, Separator};
use std::time::Duration;
use sweeper::invocation::Invocation;
use sweeper::runner::{Execution, Report};

fn invocation() -> Invocation {
    Invocation::new(
        5,
        "java".into(),
        vec!["-jar".into(), "lock-free.jar".into(), "8".into(), "8".into(), "10".into(), "1".into()],
        vec![
            ("threads".into(), "8".into()),
            ("ops".into(), "10".into()),
            ("mode".into(), "1".into()),
        ],
    )
}

#[test]
fn seconds() {
    let seconds = Seconds(Duration::from_millis(1_234));
    assert_eq!("1.234 s", seconds.to_string());
    assert_eq!("   1.234 s", format!("{seconds:10}"));
}

#[test]
fn point_label() {
    assert_eq!("threads=8 ops=10 mode=1", PointLabel(&invocation()).to_string());
    assert_eq!("threads=8 ops=10 mode=1   ", format!("{:26}", PointLabel(&invocation())));
}

#[test]
fn rows_line_up_with_header() {
    let execution = Execution {
        invocation: invocation(),
        code: Some(0),
        stdout: None,
        elapsed: Duration::from_millis(250),
    };
    let row = Row(&execution).to_string();
    let header = Header().to_string();
    let separator = Separator().to_string();
    assert_eq!(header.len(), row.len());
    assert_eq!(separator.len(), row.len());
    assert!(row.starts_with("|     5|threads=8 ops=10 mode=1"));
    assert!(row.ends_with("|       0|       0.250 s|"));
}

#[test]
fn signalled_row() {
    let execution = Execution {
        invocation: invocation(),
        code: None,
        stdout: None,
        elapsed: Duration::ZERO,
    };
    assert!(Row(&execution).to_string().contains("|  signal|"));
}

#[test]
fn planned_row() {
    assert_eq!("|     #|command", PlanHeader().to_string());
    assert_eq!(
        "|     5|java -jar lock-free.jar 8 8 10 1",
        Planned(&invocation()).to_string()
    );
}

#[test]
fn footer() {
    let report = Report {
        executions: vec![],
        elapsed: Duration::from_secs(3),
    };
    let footer = Footer(&report).to_string();
    assert_eq!(Separator().to_string().len(), footer.len());
    assert!(footer.starts_with("|     0|invocations"));
    assert!(footer.ends_with("       3.000 s|"));
}
