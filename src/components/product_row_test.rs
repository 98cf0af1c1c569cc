use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date")
}

fn plus_days(days: i64) -> String {
    (today() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[test]
fn expiry_alert_under_seven_days() {
    assert_eq!(expiry_level(Some(&plus_days(0)), today()), ExpiryLevel::Alert);
    assert_eq!(expiry_level(Some(&plus_days(6)), today()), ExpiryLevel::Alert);
    assert_eq!(
        expiry_level(Some(&plus_days(-30)), today()),
        ExpiryLevel::Alert,
        "already expired counts as alert"
    );
}

#[test]
fn expiry_warn_under_fifteen_days() {
    assert_eq!(expiry_level(Some(&plus_days(7)), today()), ExpiryLevel::Warn);
    assert_eq!(expiry_level(Some(&plus_days(14)), today()), ExpiryLevel::Warn);
}

#[test]
fn expiry_ok_from_fifteen_days_out() {
    assert_eq!(expiry_level(Some(&plus_days(15)), today()), ExpiryLevel::Ok);
    assert_eq!(expiry_level(Some(&plus_days(365)), today()), ExpiryLevel::Ok);
}

#[test]
fn expiry_none_for_missing_or_invalid_dates() {
    assert_eq!(expiry_level(None, today()), ExpiryLevel::None);
    assert_eq!(expiry_level(Some("soon"), today()), ExpiryLevel::None);
    assert_eq!(expiry_level(Some(""), today()), ExpiryLevel::None);
}

#[test]
fn expiry_tolerates_full_iso_timestamps() {
    assert_eq!(
        expiry_level(Some("2025-03-04T00:00:00Z"), today()),
        ExpiryLevel::Alert
    );
}

#[test]
fn stock_buckets_split_at_five_and_eleven() {
    assert_eq!(stock_level(0.0), StockLevel::Low);
    assert_eq!(stock_level(4.9), StockLevel::Low);
    assert_eq!(stock_level(5.0), StockLevel::Warn);
    assert_eq!(stock_level(10.0), StockLevel::Warn);
    assert_eq!(stock_level(11.0), StockLevel::Safe);
    assert_eq!(stock_level(250.0), StockLevel::Safe);
}
