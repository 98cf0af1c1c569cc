use super::*;

#[test]
fn required_rejects_blank_values() {
    assert!(required("").is_some());
    assert!(required("   ").is_some());
    assert!(required("Milk").is_none());
}

#[test]
fn non_negative_accepts_zero_and_decimals() {
    assert!(non_negative("0").is_none());
    assert!(non_negative("2.5").is_none());
    assert!(non_negative(" 12 ").is_none());
}

#[test]
fn non_negative_rejects_negatives_and_garbage() {
    assert!(non_negative("-1").is_some());
    assert!(non_negative("").is_some());
    assert!(non_negative("abc").is_some());
}
