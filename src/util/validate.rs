#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Reject blank values.
pub fn required(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("This field is required")
    } else {
        None
    }
}

/// Reject values that do not parse as a number ≥ 0.
pub fn non_negative(value: &str) -> Option<&'static str> {
    match value.trim().parse::<f64>() {
        Ok(number) if number >= 0.0 => None,
        _ => Some("Must be a number greater than or equal to 0"),
    }
}
