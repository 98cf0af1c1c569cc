#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::Category;

/// Category collection state.
#[derive(Clone, Debug, Default)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Whether `name` collides with an existing category name, comparing
/// case-insensitively on trimmed names. `exclude_id` skips the category being
/// edited so a rename to its own name passes.
pub fn is_duplicate_name(categories: &[Category], name: &str, exclude_id: Option<i64>) -> bool {
    let wanted = name.trim().to_lowercase();
    categories
        .iter()
        .filter(|category| Some(category.id) != exclude_id)
        .any(|category| category.name.trim().to_lowercase() == wanted)
}
