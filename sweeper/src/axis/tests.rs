use crate::axis::{is_valid_name, Axis};

#[test]
fn values_are_stringified_in_order() {
    let axis = Axis::new("ops", [10u64.pow(6), 10u64.pow(7)]);
    assert_eq!("ops", axis.name());
    assert_eq!(&["1000000".to_string(), "10000000".to_string()], axis.values());
    assert_eq!(2, axis.len());
    assert!(!axis.is_empty());
}

#[test]
fn empty_axis() {
    let axis = Axis::new("mode", Vec::<u8>::new());
    assert!(axis.is_empty());
    assert_eq!(0, axis.len());
}

#[test]
fn name_validity() {
    assert!(is_valid_name("threads"));
    assert!(is_valid_name("list-type"));
    assert!(is_valid_name("ops_2"));
    assert!(!is_valid_name(""));
    assert!(!is_valid_name("two words"));
    assert!(!is_valid_name("{x}"));
}
