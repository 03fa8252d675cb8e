//! # Actions
//!
//! Everything that can happen on the screen becomes an `Action`.
//! User presses `+` on a row? That's `Action::IncrementExtra(id)`.
//! The food fetch lands? That's `Action::FoodLoaded(food)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O the host still has
//! to run. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and effect.
//! The TUI loop is the only caller; remote completions come back in as more
//! actions through the same funnel.

use crate::api::{Extra, Food, OrderPayload};
use crate::core::money;
use crate::core::state::Screen;

#[derive(Debug)]
pub enum Action {
    /// `GET foods/{id}` landed.
    FoodLoaded(Food),
    /// `GET foods/{id}` failed; the screen has nothing to show.
    FoodLoadFailed(String),
    /// `GET favorites` landed with the full favorites snapshot.
    FavoritesLoaded(Vec<Food>),
    /// `GET favorites` failed. Not fatal: the flag just stays off.
    FavoritesLoadFailed(String),
    IncrementExtra(u64),
    DecrementExtra(u64),
    IncrementQuantity,
    DecrementQuantity,
    ToggleFavorite,
    /// The favorite write for `favorited` succeeded.
    FavoriteSynced { favorited: bool },
    /// The favorite write for `favorited` failed; roll back if still current.
    FavoriteSyncFailed { favorited: bool, error: String },
    ConfirmOrder,
    OrderAccepted,
    OrderFailed(String),
    Quit,
}

/// I/O the host must perform after a state change. The reducer never talks
/// to the network itself.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    /// Store the full food record in the favorites collection.
    SaveFavorite(Food),
    /// Remove the food from the favorites collection.
    RemoveFavorite(u64),
    /// Post the composed order.
    PostOrder(OrderPayload),
    Quit,
}

pub fn update(screen: &mut Screen, action: Action) -> Effect {
    match action {
        Action::FoodLoaded(mut food) => {
            food.formatted_price = money::format_price(food.price);
            // The ledger starts every row at zero no matter what the backend
            // sent; the record itself keeps the raw extras.
            screen.extras = food
                .extras
                .iter()
                .map(|extra| Extra {
                    quantity: 0,
                    ..extra.clone()
                })
                .collect();
            screen.food = Some(food);
            screen.status_message = String::from("Pronto.");
            Effect::None
        }
        Action::FoodLoadFailed(message) => {
            screen.error = Some(message);
            screen.status_message = String::from("Erro ao carregar.");
            Effect::None
        }
        Action::FavoritesLoaded(favorites) => {
            // Matched against the id the screen was opened with, not the
            // loaded record: the two fetches race.
            screen.is_favorite = favorites.iter().any(|food| food.id == screen.food_id);
            Effect::None
        }
        Action::FavoritesLoadFailed(_) => {
            screen.status_message = String::from("Não foi possível carregar os favoritos.");
            Effect::None
        }
        Action::IncrementExtra(id) => {
            if let Some(extra) = screen.extras.iter_mut().find(|extra| extra.id == id) {
                extra.quantity = extra.quantity.saturating_add(1);
            }
            Effect::None
        }
        Action::DecrementExtra(id) => {
            if let Some(extra) = screen.extras.iter_mut().find(|extra| extra.id == id)
                && extra.quantity > 0
            {
                extra.quantity -= 1;
            }
            Effect::None
        }
        Action::IncrementQuantity => {
            screen.quantity = screen.quantity.saturating_add(1);
            Effect::None
        }
        Action::DecrementQuantity => {
            if screen.quantity > 1 {
                screen.quantity -= 1;
            }
            Effect::None
        }
        Action::ToggleFavorite => {
            // Nothing to post before the record is in; ignore early presses.
            let Some(food) = &screen.food else {
                return Effect::None;
            };
            screen.is_favorite = !screen.is_favorite;
            if screen.is_favorite {
                Effect::SaveFavorite(food.clone())
            } else {
                Effect::RemoveFavorite(screen.food_id)
            }
        }
        Action::FavoriteSynced { .. } => Effect::None,
        Action::FavoriteSyncFailed { favorited, .. } => {
            // Revert the optimistic flip, unless the user toggled again in
            // the meantime - the newer intent wins.
            if screen.is_favorite == favorited {
                screen.is_favorite = !favorited;
            }
            screen.status_message = String::from("Falha ao salvar o favorito.");
            Effect::None
        }
        Action::ConfirmOrder => {
            if screen.submitting {
                return Effect::None;
            }
            let Some(food) = &screen.food else {
                return Effect::None;
            };
            let payload = OrderPayload::compose(food, &screen.extras);
            screen.submitting = true;
            screen.status_message = String::from("Enviando pedido...");
            Effect::PostOrder(payload)
        }
        Action::OrderAccepted => {
            screen.submitting = false;
            screen.status_message = String::from("Pedido confirmado!");
            Effect::None
        }
        Action::OrderFailed(_) => {
            screen.submitting = false;
            screen.status_message = String::from("Falha ao enviar o pedido.");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
