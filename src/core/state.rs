//! # Screen State
//!
//! Everything the food details screen knows, free of terminal types.
//! Presentation concerns (selection, scroll) live in the `tui` module.
//!
//! ```text
//! Screen
//! ├── client: Arc<dyn MenuApi>     // REST backend
//! ├── food_id: u64                 // the id this screen was opened with
//! ├── food: Option<Food>           // loaded record (None until fetch lands)
//! ├── extras: Vec<Extra>           // the order's extras ledger
//! ├── is_favorite: bool            // favorite flag
//! ├── quantity: u32                // order quantity, never below 1
//! ├── submitting: bool             // an order POST is in flight
//! ├── status_message: String       // status bar text
//! └── error: Option<String>        // fatal load error
//! ```
//!
//! The extras ledger is deliberately a separate list from `food.extras`:
//! the ledger starts every quantity at zero and belongs to the order being
//! built, while the food record keeps whatever the backend sent (it gets
//! posted back verbatim on favorite-create).
//!
//! All mutation goes through `update(screen, action)` in action.rs, so any
//! state change can be traced to one action.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::api::{Extra, Food, MenuApi};
use crate::core::money;

pub struct Screen {
    pub client: Arc<dyn MenuApi>,
    pub food_id: u64,
    pub food: Option<Food>,
    pub extras: Vec<Extra>,
    pub is_favorite: bool,
    pub quantity: u32,
    pub submitting: bool,
    pub status_message: String,
    pub error: Option<String>,
}

impl Screen {
    pub fn new(client: Arc<dyn MenuApi>, food_id: u64) -> Self {
        Self {
            client,
            food_id,
            food: None,
            extras: Vec::new(),
            is_favorite: false,
            quantity: 1,
            submitting: false,
            status_message: String::from("Carregando..."),
            error: None,
        }
    }

    /// True while the initial fetch is outstanding (no record, no error yet).
    pub fn loading(&self) -> bool {
        self.food.is_none() && self.error.is_none()
    }

    /// Current order total, recomputed on every read.
    /// `None` until the food record has loaded.
    pub fn cart_total(&self) -> Option<Decimal> {
        self.food
            .as_ref()
            .map(|food| money::order_total(food.price, &self.extras, self.quantity))
    }

    /// The total as displayed in the footer, e.g. `R$ 45,80`.
    pub fn formatted_total(&self) -> Option<String> {
        self.cart_total().map(money::format_price)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_screen;

    #[test]
    fn test_screen_new_defaults() {
        let screen = test_screen();
        assert!(screen.food.is_none());
        assert!(screen.extras.is_empty());
        assert!(!screen.is_favorite);
        assert_eq!(screen.quantity, 1);
        assert!(!screen.submitting);
        assert!(screen.loading());
        assert_eq!(screen.status_message, "Carregando...");
    }

    #[test]
    fn test_cart_total_is_none_before_load() {
        let screen = test_screen();
        assert!(screen.cart_total().is_none());
        assert!(screen.formatted_total().is_none());
    }
}
