use super::*;
use crate::net::types::CategoryRef;

fn product(id: i64, name: &str, stock: f64) -> Product {
    Product {
        id,
        name: name.to_owned(),
        price: 2.50,
        stock,
        category: CategoryRef {
            id: 1,
            name: "Dairy".to_owned(),
        },
        creation_date: "2025-01-10".to_owned(),
        update_date: "2025-01-10".to_owned(),
        expiration_date: None,
        active: stock > 0.0,
    }
}

#[test]
fn products_state_defaults() {
    let state = ProductsState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.total, 0);
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.metrics.is_empty());
    assert!(state.last_signature.is_none());
}

#[test]
fn apply_page_replaces_rows_and_clears_error() {
    let mut state = ProductsState {
        error: Some("Failed to fetch products".to_owned()),
        ..ProductsState::default()
    };
    state.apply_page(ProductPage {
        content: vec![product(1, "Milk", 8.0)],
        total_elements: 41,
    });

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.total, 41);
    assert!(state.error.is_none());
}

#[test]
fn replace_swaps_only_the_matching_row() {
    let mut state = ProductsState::default();
    state.apply_page(ProductPage {
        content: vec![product(1, "Milk", 8.0), product(2, "Eggs", 12.0)],
        total_elements: 2,
    });

    state.replace(product(2, "Free-range Eggs", 0.0));
    assert_eq!(state.items[0].name, "Milk");
    assert_eq!(state.items[1].name, "Free-range Eggs");
    assert!(state.items[1].is_out_of_stock());
}

#[test]
fn replace_ignores_rows_outside_the_current_page() {
    let mut state = ProductsState::default();
    state.apply_page(ProductPage {
        content: vec![product(1, "Milk", 8.0)],
        total_elements: 1,
    });

    state.replace(product(99, "Phantom", 1.0));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].name, "Milk");
}
