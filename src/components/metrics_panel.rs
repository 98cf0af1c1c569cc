//! Per-category inventory metrics table.

use leptos::prelude::*;

use crate::state::products::ProductsState;
use crate::util::format::{format_currency, format_stock};

/// Server-computed aggregates per category, plus the overall row.
#[component]
pub fn MetricsPanel() -> impl IntoView {
    let products = expect_context::<RwSignal<ProductsState>>();

    view! {
        <div class="metrics-panel">
            <h2 class="metrics-panel__title">"Inventory Metrics"</h2>
            <table class="metrics-panel__table">
                <thead>
                    <tr>
                        <th>"Category"</th>
                        <th>"Total Products in Stock"</th>
                        <th>"Total Value in Stock"</th>
                        <th>"Average Price in Stock"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        products
                            .get()
                            .metrics
                            .into_iter()
                            .map(|metric| {
                                view! {
                                    <tr>
                                        <td>{metric.category_name.clone()}</td>
                                        <td>{format_stock(metric.total_stock)}</td>
                                        <td>{format_currency(metric.total_value)}</td>
                                        <td>{format_currency(metric.average_price)}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
