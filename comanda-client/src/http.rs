//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult, OrderingApi};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::error::ErrorBody;
use shared::models::{Order, OrderCreate, OrderStatus, OrderStatusUpdate, Product, StockEntry};

/// HTTP client for making network requests to the ordering API
#[derive(Debug, Clone)]
pub struct OrderingClient {
    client: Client,
    base_url: String,
}

impl OrderingClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body, ignoring the response body
    async fn put<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_unit_response(response).await
    }

    /// Make a PUT request without body, ignoring the response body
    async fn put_no_body(&self, path: &str) -> ClientResult<()> {
        let response = self.client.put(self.url(path)).send().await?;
        Self::handle_unit_response(response).await
    }

    /// Make a DELETE request
    async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_unit_response(response).await
    }

    /// Handle the HTTP response, decoding the JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from(status, response.text().await?));
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle the HTTP response for calls whose body is not consumed
    async fn handle_unit_response(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::error_from(status, response.text().await?));
        }

        Ok(())
    }

    /// Map an error status and body to a client error
    ///
    /// The backend reports rejections as `{"message": "..."}`; the raw body
    /// is kept when that shape does not decode.
    fn error_from(status: StatusCode, body: String) -> ClientError {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);

        tracing::warn!(%status, "API request rejected: {message}");

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ => ClientError::Internal(message),
        }
    }
}

#[async_trait]
impl OrderingApi for OrderingClient {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get("products").await
    }

    async fn list_stocks(&self) -> ClientResult<Vec<StockEntry>> {
        self.get("stocks").await
    }

    async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("orders").await
    }

    async fn create_order(&self, order: &OrderCreate) -> ClientResult<Order> {
        self.post("orders", order).await
    }

    async fn accept_order(&self, id: &str) -> ClientResult<()> {
        self.put_no_body(&format!("orders/{id}/accept")).await
    }

    async fn deliver_order(&self, id: &str) -> ClientResult<()> {
        let update = OrderStatusUpdate {
            status: OrderStatus::Delivered,
        };
        self.put(&format!("orders/{id}"), &update).await
    }

    async fn delete_order(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("orders/{id}")).await
    }
}
