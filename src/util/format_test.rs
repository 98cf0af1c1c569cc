use super::*;

#[test]
fn currency_has_two_decimals_and_a_dollar_sign() {
    assert_eq!(format_currency(3.5), "$3.50");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(1299.999), "$1300.00");
}

#[test]
fn stock_has_two_decimals() {
    assert_eq!(format_stock(7.0), "7.00");
    assert_eq!(format_stock(2.345), "2.35");
}
