#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::{InventoryMetric, Product, ProductPage};

/// Product listing state: the current page of rows, the metrics table, and
/// fetch bookkeeping.
///
/// `last_signature` remembers the serialized form of the most recently issued
/// listing request so an unchanged query is not fetched twice in a row.
#[derive(Clone, Debug, Default)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub total: u64,
    pub loading: bool,
    pub error: Option<String>,
    pub metrics: Vec<InventoryMetric>,
    pub last_signature: Option<String>,
}

impl ProductsState {
    /// Apply a listing response, clearing any stale error.
    pub fn apply_page(&mut self, page: ProductPage) {
        self.items = page.content;
        self.total = page.total_elements;
        self.error = None;
    }

    /// Swap an updated product into the current page in place. Rows from
    /// other pages are simply not present and stay untouched.
    pub fn replace(&mut self, product: Product) {
        if let Some(slot) = self.items.iter_mut().find(|p| p.id == product.id) {
            *slot = product;
        }
    }
}
