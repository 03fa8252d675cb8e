use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An optional add-on for a menu item.
///
/// `value` is the per-unit price. The backend may or may not send a
/// `quantity` field; it defaults to 0 and the screen resets it to 0 at load
/// time anyway, so an order always starts from a clean ledger.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Extra {
    pub id: u64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    #[serde(default)]
    pub quantity: u32,
}

/// A menu item as served by `foods/{id}` and the `favorites` collection.
///
/// `formatted_price` is not part of the backend's own records: it is attached
/// client-side after a fetch. The wire name `formattedPrice` is kept so the
/// full record round-trips into the favorites collection unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Food {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: u64,
    pub image_url: String,
    pub thumbnail_url: String,
    #[serde(rename = "formattedPrice", default)]
    pub formatted_price: String,
    #[serde(default)]
    pub extras: Vec<Extra>,
}

/// The body posted to `orders`: a subset of the food record plus the extras
/// ledger exactly as the user left it, zero-quantity rows included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderPayload {
    pub product_id: u64,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: u64,
    pub thumbnail_url: String,
    pub extras: Vec<Extra>,
}

impl OrderPayload {
    /// Composes the order body from the loaded food record and the current
    /// extras ledger. Only the fields the orders endpoint expects are taken;
    /// `image_url` and the attached formatted price stay behind.
    pub fn compose(food: &Food, extras: &[Extra]) -> Self {
        OrderPayload {
            product_id: food.id,
            name: food.name.clone(),
            description: food.description.clone(),
            price: food.price,
            category: food.category,
            thumbnail_url: food.thumbnail_url.clone(),
            extras: extras.to_vec(),
        }
    }
}
