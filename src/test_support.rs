//! Fixtures shared by the unit tests.
//!
//! Compiled only under `#[cfg(test)]`.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::api::{ApiError, Extra, Food, MenuApi, OrderPayload};
use crate::core::action::{update, Action};
use crate::core::state::Screen;

/// A no-op client for tests that don't need real API calls.
pub struct NoopMenuApi;

#[async_trait]
impl MenuApi for NoopMenuApi {
    async fn fetch_food(&self, _id: u64) -> Result<Food, ApiError> {
        Ok(sample_food())
    }

    async fn list_favorites(&self) -> Result<Vec<Food>, ApiError> {
        Ok(Vec::new())
    }

    async fn create_favorite(&self, _food: &Food) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_favorite(&self, _id: u64) -> Result<(), ApiError> {
        Ok(())
    }

    async fn submit_order(&self, _order: &OrderPayload) -> Result<(), ApiError> {
        Ok(())
    }
}

/// The menu item most tests run against: id 1, price 19.9, two extras.
pub fn sample_food() -> Food {
    Food {
        id: 1,
        name: "Ao molho".to_string(),
        description: "Macarrão ao molho branco, fughi e cheiro verde das montanhas.".to_string(),
        price: Decimal::from_str("19.9").unwrap(),
        category: 1,
        image_url: "http://example.com/ao_molho.png".to_string(),
        thumbnail_url: "http://example.com/ao_molho_low.png".to_string(),
        formatted_price: String::new(),
        extras: vec![
            Extra {
                id: 1,
                name: "Bacon".to_string(),
                value: Decimal::from_str("1.5").unwrap(),
                quantity: 0,
            },
            Extra {
                id: 2,
                name: "Frango".to_string(),
                value: Decimal::from_str("2").unwrap(),
                quantity: 0,
            },
        ],
    }
}

/// Creates a fresh Screen for food id 1 backed by a NoopMenuApi.
pub fn test_screen() -> Screen {
    Screen::new(Arc::new(NoopMenuApi), 1)
}

/// A Screen that already received its food record (ledger zeroed, total live).
pub fn loaded_screen() -> Screen {
    let mut screen = test_screen();
    update(&mut screen, Action::FoodLoaded(sample_food()));
    screen
}
