#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a money amount as `$x.yz`.
pub fn format_currency(value: f64) -> String {
    format!("${value:.2}")
}

/// Render a stock quantity with two decimals, matching the metrics table.
pub fn format_stock(value: f64) -> String {
    format!("{value:.2}")
}
