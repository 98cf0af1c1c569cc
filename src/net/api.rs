//! REST calls for the inventory endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, same-origin under
//! `/api`. Server-side (SSR): stubs returning [`ApiError::server_render`]
//! since these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every non-2xx response becomes an [`ApiError`] carrying the HTTP status
//! and the body's `message` field when one is present. Network-level
//! failures map to status 0. No retry policy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    Category, CategoryDraft, InventoryMetric, Product, ProductDraft, ProductPage,
};

/// Uniform error shape for every api call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// A failure before any HTTP status was available.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
        }
    }

    /// Stub error for the server render path.
    pub fn server_render() -> Self {
        Self::network("not available on server")
    }
}

/// Extract a display message from an error response body.
///
/// Prefers the body's JSON `message` field; falls back to `HTTP {status}`
/// for non-JSON bodies or bodies without a usable message.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(feature = "hydrate")]
fn request_error(err: gloo_net::Error) -> ApiError {
    ApiError::network(err.to_string())
}

/// Reject non-2xx responses, converting the body into an [`ApiError`].
#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError {
        status,
        message: error_message(status, &body),
    })
}

#[cfg(feature = "hydrate")]
async fn json_body<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(request_error)
}

/// Fetch one page of products for the composed listing parameters.
pub async fn fetch_products(params: &[(&'static str, String)]) -> Result<ProductPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/products")
            .query(params.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(request_error)?;
        json_body(check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err(ApiError::server_render())
    }
}

/// Create a product via `POST /api/products`.
pub async fn create_product(draft: &ProductDraft) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/products")
            .json(draft)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        json_body(check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::server_render())
    }
}

/// Update a product via `PUT /api/products/{id}`.
pub async fn update_product(id: i64, draft: &ProductDraft) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/products/{id}");
        let resp = gloo_net::http::Request::put(&url)
            .json(draft)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        json_body(check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(ApiError::server_render())
    }
}

/// Restore a product's default stock via `PUT /api/products/{id}/instock`.
pub async fn set_product_in_stock(id: i64) -> Result<Product, ApiError> {
    put_product_state(id, "instock").await
}

/// Zero a product's stock via `PUT /api/products/{id}/outofstock`.
pub async fn set_product_out_of_stock(id: i64) -> Result<Product, ApiError> {
    put_product_state(id, "outofstock").await
}

async fn put_product_state(id: i64, state: &str) -> Result<Product, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/products/{id}/{state}");
        let resp = gloo_net::http::Request::put(&url)
            .send()
            .await
            .map_err(request_error)?;
        json_body(check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, state);
        Err(ApiError::server_render())
    }
}

/// Delete a product via `DELETE /api/products/{id}`.
pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/products/{id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(request_error)?;
        check(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_render())
    }
}

/// Fetch the per-category aggregates via `GET /api/products/metrics`.
pub async fn fetch_metrics() -> Result<Vec<InventoryMetric>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/products/metrics")
            .send()
            .await
            .map_err(request_error)?;
        json_body(check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::server_render())
    }
}

/// Fetch all categories via `GET /api/categories`.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/categories")
            .send()
            .await
            .map_err(request_error)?;
        json_body(check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::server_render())
    }
}

/// Create a category via `POST /api/categories`.
pub async fn create_category(draft: &CategoryDraft) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/categories")
            .json(draft)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        json_body(check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err(ApiError::server_render())
    }
}

/// Rename a category via `PUT /api/categories/{id}`.
pub async fn update_category(id: i64, draft: &CategoryDraft) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/categories/{id}");
        let resp = gloo_net::http::Request::put(&url)
            .json(draft)
            .map_err(request_error)?
            .send()
            .await
            .map_err(request_error)?;
        json_body(check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft);
        Err(ApiError::server_render())
    }
}

/// Delete a category via `DELETE /api/categories/{id}`.
pub async fn delete_category(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/categories/{id}");
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(request_error)?;
        check(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::server_render())
    }
}
