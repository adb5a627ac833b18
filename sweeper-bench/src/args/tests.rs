use crate::args::{parse_axis, ArgError, ArgRange, MAX_RANGE_LEN};
use std::str::FromStr;

#[test]
fn list() {
    let range = ArgRange::from_str("2, 8,16").unwrap();
    assert_eq!(ArgRange::List(vec!["2".into(), "8".into(), "16".into()]), range);
    assert_eq!(vec!["2", "8", "16"], range.values());
}

#[test]
fn single_value() {
    let range = ArgRange::from_str("1000000").unwrap();
    assert_eq!(vec!["1000000"], range.values());
}

#[test]
fn stepped() {
    let range = ArgRange::from_str("2:16:4").unwrap();
    assert_eq!(ArgRange::Stepped { start: 2, end: 16, step: 4 }, range);
    assert_eq!(vec!["2", "6", "10", "14"], range.values());

    let range = ArgRange::from_str("1:3").unwrap();
    assert_eq!(vec!["1", "2", "3"], range.values());

    let range = ArgRange::from_str("5:5").unwrap();
    assert_eq!(vec!["5"], range.values());
}

#[test]
fn stepped_near_overflow() {
    let spec = format!("{}:{}:10", u64::MAX - 5, u64::MAX);
    let range = ArgRange::from_str(&spec).unwrap();
    assert_eq!(vec![(u64::MAX - 5).to_string()], range.values());
}

#[test]
fn oversized_range_is_rejected() {
    assert!(ArgRange::from_str(&format!("1:{MAX_RANGE_LEN}")).is_ok());
    assert_eq!(
        ArgError(format!("range '0:{MAX_RANGE_LEN}' has more than {MAX_RANGE_LEN} values")),
        ArgRange::from_str(&format!("0:{MAX_RANGE_LEN}")).unwrap_err()
    );
    assert!(ArgRange::from_str(&format!("0:{}", u64::MAX)).is_err());
    assert!(ArgRange::from_str(&format!("0:{}:{}", u64::MAX, u64::MAX / 2)).is_ok());
}

#[test]
fn invalid_ranges() {
    for spec in ["1:x", "1:2:3:4", "4:2", "1:8:0", "2,,8", "", "-1:4"] {
        assert!(ArgRange::from_str(spec).is_err(), "'{spec}' should not parse");
    }
    assert_eq!(
        ArgError("range '1:8:0' has a zero step".into()),
        ArgRange::from_str("1:8:0").unwrap_err()
    );
}

#[test]
fn named_axis() {
    let axis = parse_axis("threads=2,8,16").unwrap();
    assert_eq!("threads", axis.name());
    assert_eq!(&["2", "8", "16"], axis.values());

    let axis = parse_axis("mode=0:1").unwrap();
    assert_eq!("mode", axis.name());
    assert_eq!(&["0", "1"], axis.values());
}

#[test]
fn invalid_named_axis() {
    assert_eq!(
        "axis 'threads' must be NAME=SPEC",
        parse_axis("threads").unwrap_err().to_string()
    );
    assert_eq!(
        "invalid axis name ''",
        parse_axis("=1,2").unwrap_err().to_string()
    );
    assert!(parse_axis("threads=").is_err());
}
