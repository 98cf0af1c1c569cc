use super::*;

fn categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Dairy".to_owned(),
        },
        Category {
            id: 2,
            name: " Beverages ".to_owned(),
        },
    ]
}

#[test]
fn categories_state_defaults() {
    let state = CategoriesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn duplicate_name_is_case_insensitive_and_trimmed() {
    let existing = categories();
    assert!(is_duplicate_name(&existing, "dairy", None));
    assert!(is_duplicate_name(&existing, "  DAIRY  ", None));
    assert!(is_duplicate_name(&existing, "beverages", None));
    assert!(!is_duplicate_name(&existing, "Produce", None));
}

#[test]
fn duplicate_check_skips_the_category_being_edited() {
    let existing = categories();
    assert!(!is_duplicate_name(&existing, "Dairy", Some(1)));
    assert!(is_duplicate_name(&existing, "Dairy", Some(2)));
}

#[test]
fn duplicate_check_on_empty_collection() {
    assert!(!is_duplicate_name(&[], "Dairy", None));
}
