//! Wire types mirroring the server's JSON shapes.
//!
//! Field names follow the server's camelCase convention via serde renames.
//! Stock quantities and the metric aggregates are `f64` on the wire.

use serde::{Deserialize, Serialize};

/// A product as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: f64,
    pub category: CategoryRef,
    pub creation_date: String,
    pub update_date: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default)]
    pub active: bool,
}

impl Product {
    /// Whether the product should render as unavailable. Stock is
    /// non-negative, so this is the `stock == 0` case.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock <= 0.0
    }
}

/// The category reference embedded in a product row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

/// A category as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Server-computed per-category aggregate (plus an "Overall" row).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryMetric {
    pub category_id: i64,
    pub category_name: String,
    pub total_stock: f64,
    pub total_value: f64,
    pub average_price: f64,
}

/// One page of the product listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default)]
    pub content: Vec<Product>,
    #[serde(default)]
    pub total_elements: u64,
}

/// Payload for product create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub category_id: i64,
    pub stock: f64,
    pub price: f64,
    pub expiration_date: Option<String>,
}

/// Payload for category create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
}
