//! HTTP implementation of [`MenuApi`] against the delivery backend's REST
//! routes (`foods`, `favorites`, `orders`).
//!
//! The backend is a plain JSON server: records in, records out, conventional
//! status codes. All translation to screen state happens above this layer.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::menu::{ApiError, MenuApi};
use super::types::{Food, OrderPayload};

pub struct HttpMenuApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpMenuApi {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Passes a successful response through; turns anything else into
    /// [`ApiError::Api`] with the response body as the message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        debug!("response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "(unreadable body)".to_string());
            warn!("API error: {} - {}", status, err_body);
            return Err(ApiError::Api {
                status,
                message: err_body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl MenuApi for HttpMenuApi {
    async fn fetch_food(&self, id: u64) -> Result<Food, ApiError> {
        info!("GET foods/{id}");
        let response = self
            .client
            .get(format!("{}/foods/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::ensure_success(response)
            .await?
            .json::<Food>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn list_favorites(&self) -> Result<Vec<Food>, ApiError> {
        info!("GET favorites");
        let response = self
            .client
            .get(format!("{}/favorites", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::ensure_success(response)
            .await?
            .json::<Vec<Food>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create_favorite(&self, food: &Food) -> Result<(), ApiError> {
        info!("POST favorites (food id {})", food.id);
        let response = self
            .client
            .post(format!("{}/favorites", self.base_url))
            .json(food)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn delete_favorite(&self, id: u64) -> Result<(), ApiError> {
        info!("DELETE favorites/{id}");
        let response = self
            .client
            .delete(format!("{}/favorites/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn submit_order(&self, order: &OrderPayload) -> Result<(), ApiError> {
        info!("POST orders (product id {})", order.product_id);
        let response = self
            .client
            .post(format!("{}/orders", self.base_url))
            .json(order)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::ensure_success(response).await?;
        Ok(())
    }
}
