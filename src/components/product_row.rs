//! One row of the product table, colored by expiration proximity and stock
//! level.

#[cfg(test)]
#[path = "product_row_test.rs"]
mod product_row_test;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format::format_currency;

/// Days-to-expiry bucket driving the row background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ExpiryLevel {
    /// No expiration date set or an unparseable one.
    None,
    /// Expires in under 7 days (or already expired).
    Alert,
    /// Expires in under 15 days.
    Warn,
    /// Comfortably far out.
    Ok,
}

/// Stock bucket driving the quantity badge color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StockLevel {
    /// Under 5 units.
    Low,
    /// 5 to 10 units.
    Warn,
    /// More than 10 units.
    Safe,
}

/// Classify an expiration date (`YYYY-MM-DD`, longer ISO strings tolerated)
/// relative to `today`.
pub(crate) fn expiry_level(expiration: Option<&str>, today: NaiveDate) -> ExpiryLevel {
    let Some(raw) = expiration else {
        return ExpiryLevel::None;
    };
    let date_part = raw.get(..10).unwrap_or(raw);
    let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") else {
        return ExpiryLevel::None;
    };

    let days = (date - today).num_days();
    if days < 7 {
        ExpiryLevel::Alert
    } else if days < 15 {
        ExpiryLevel::Warn
    } else {
        ExpiryLevel::Ok
    }
}

pub(crate) fn stock_level(stock: f64) -> StockLevel {
    if stock >= 11.0 {
        StockLevel::Safe
    } else if stock >= 5.0 {
        StockLevel::Warn
    } else {
        StockLevel::Low
    }
}

fn row_class(level: ExpiryLevel) -> &'static str {
    match level {
        ExpiryLevel::None => "product-row",
        ExpiryLevel::Alert => "product-row product-row--expiry-alert",
        ExpiryLevel::Warn => "product-row product-row--expiry-warn",
        ExpiryLevel::Ok => "product-row product-row--expiry-ok",
    }
}

fn stock_class(level: StockLevel) -> &'static str {
    match level {
        StockLevel::Low => "product-row__stock product-row__stock--low",
        StockLevel::Warn => "product-row__stock product-row__stock--warn",
        StockLevel::Safe => "product-row__stock product-row__stock--safe",
    }
}

/// A product table row with edit, delete, and stock toggle actions.
#[component]
pub fn ProductRow(
    product: Product,
    on_edit: Callback<Product>,
    on_delete: Callback<Product>,
    on_toggle: Callback<Product>,
) -> impl IntoView {
    let today = chrono::Local::now().date_naive();
    let out_of_stock = product.is_out_of_stock();

    let row = row_class(expiry_level(product.expiration_date.as_deref(), today));
    let stock_badge = if out_of_stock {
        format!("{} product-row__stock--out", stock_class(stock_level(product.stock)))
    } else {
        stock_class(stock_level(product.stock)).to_owned()
    };
    let text = if out_of_stock {
        "product-row__text product-row__text--out"
    } else {
        "product-row__text"
    };

    let expiration_label = product
        .expiration_date
        .clone()
        .unwrap_or_else(|| "N/A".to_owned());
    let toggle_label = if out_of_stock { "Restock" } else { "Deplete" };
    let toggle_title = if out_of_stock {
        "Restore default stock"
    } else {
        "Set out of stock"
    };

    let edit_target = product.clone();
    let delete_target = product.clone();
    let toggle_target = product.clone();

    view! {
        <tr class=row>
            <td><span class=text>{product.category.name.clone()}</span></td>
            <td><span class=text>{product.name.clone()}</span></td>
            <td><span class=text>{format_currency(product.price)}</span></td>
            <td><span class=text>{expiration_label}</span></td>
            <td>
                <span class=stock_badge>{product.stock.to_string()}</span>
            </td>
            <td>
                <button
                    class="btn btn--small"
                    title=toggle_title
                    on:click=move |_| on_toggle.run(toggle_target.clone())
                >
                    {toggle_label}
                </button>
            </td>
            <td class="product-row__actions">
                <button class="btn btn--small" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| on_delete.run(delete_target.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
