//! Top-level pages wired to the router.

pub mod categories;
pub mod products;
