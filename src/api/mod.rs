pub mod http;
pub mod menu;
pub mod types;

pub use http::HttpMenuApi;
pub use menu::{ApiError, MenuApi};
pub use types::{Extra, Food, OrderPayload};
