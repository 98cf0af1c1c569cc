//! UI components for the inventory interface.

pub mod category_form;
pub mod category_table;
pub mod confirm_dialog;
pub mod flash;
pub mod metrics_panel;
pub mod product_filter;
pub mod product_form;
pub mod product_row;
pub mod product_table;
pub mod top_bar;
