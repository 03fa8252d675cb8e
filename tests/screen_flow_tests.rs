use std::sync::Arc;

use prato::api::HttpMenuApi;
use prato::core::action::{update, Action, Effect};
use prato::core::state::Screen;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Backend record for food 1 with two priced extras.
fn food_json() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Ao molho",
        "description": "Macarrão ao molho branco, fughi e cheiro verde das montanhas.",
        "price": 19.9,
        "category": 1,
        "image_url": "http://example.com/ao_molho.png",
        "thumbnail_url": "http://example.com/ao_molho_low.png",
        "extras": [
            { "id": 1, "name": "Bacon", "value": 1.5 },
            { "id": 2, "name": "Frango", "value": 2.0 }
        ]
    })
}

/// Mounts the two read routes the screen hits on startup.
async fn mount_load_routes(mock_server: &MockServer, favorites: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/foods/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(food_json()))
        .mount(mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(favorites))
        .mount(mock_server)
        .await;
}

/// A fresh screen for food 1 backed by the mock server.
fn screen_for(mock_server: &MockServer) -> Screen {
    Screen::new(Arc::new(HttpMenuApi::new(mock_server.uri())), 1)
}

/// Performs the startup reads and feeds each result through the reducer,
/// standing in for the host loop's background loader.
async fn load_screen(screen: &mut Screen) {
    let client = Arc::clone(&screen.client);

    let action = match client.fetch_food(screen.food_id).await {
        Ok(food) => Action::FoodLoaded(food),
        Err(e) => Action::FoodLoadFailed(e.to_string()),
    };
    update(screen, action);

    let action = match client.list_favorites().await {
        Ok(favorites) => Action::FavoritesLoaded(favorites),
        Err(e) => Action::FavoritesLoadFailed(e.to_string()),
    };
    update(screen, action);
}

/// Runs the I/O an effect describes and feeds the completion back, standing
/// in for the host loop's spawned writers.
async fn settle(screen: &mut Screen, effect: Effect) {
    let client = Arc::clone(&screen.client);

    let action = match effect {
        Effect::None | Effect::Quit => return,
        Effect::SaveFavorite(food) => match client.create_favorite(&food).await {
            Ok(()) => Action::FavoriteSynced { favorited: true },
            Err(e) => Action::FavoriteSyncFailed {
                favorited: true,
                error: e.to_string(),
            },
        },
        Effect::RemoveFavorite(id) => match client.delete_favorite(id).await {
            Ok(()) => Action::FavoriteSynced { favorited: false },
            Err(e) => Action::FavoriteSyncFailed {
                favorited: false,
                error: e.to_string(),
            },
        },
        Effect::PostOrder(payload) => match client.submit_order(&payload).await {
            Ok(()) => Action::OrderAccepted,
            Err(e) => Action::OrderFailed(e.to_string()),
        },
    };
    update(screen, action);
}

// ============================================================================
// Startup Load Tests
// ============================================================================

#[tokio::test]
async fn test_startup_load_populates_screen() {
    let mock_server = MockServer::start().await;
    mount_load_routes(&mock_server, json!([])).await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;

    assert!(!screen.loading());
    assert!(screen.error.is_none());
    assert_eq!(screen.status_message, "Pronto.");
    assert_eq!(screen.extras.len(), 2);
    assert!(screen.extras.iter().all(|extra| extra.quantity == 0));
    assert!(!screen.is_favorite);
    assert_eq!(screen.formatted_total().as_deref(), Some("R$ 19,90"));
    assert_eq!(
        screen.food.as_ref().map(|food| food.formatted_price.as_str()),
        Some("R$ 19,90")
    );
}

#[tokio::test]
async fn test_startup_load_flags_favorited_dish() {
    let mock_server = MockServer::start().await;
    mount_load_routes(&mock_server, json!([food_json()])).await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;

    assert!(screen.is_favorite);
}

#[tokio::test]
async fn test_startup_load_ignores_other_favorites() {
    let mock_server = MockServer::start().await;
    let mut other = food_json();
    other["id"] = json!(3);
    mount_load_routes(&mock_server, json!([other])).await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;

    assert!(!screen.is_favorite);
}

#[tokio::test]
async fn test_backend_down_shows_error() {
    // Nothing listens on port 1; both startup reads fail fast
    let mut screen = Screen::new(Arc::new(HttpMenuApi::new("http://127.0.0.1:1".to_string())), 1);
    load_screen(&mut screen).await;

    assert!(!screen.loading());
    assert!(screen.error.is_some());
    assert!(screen.food.is_none());
    assert!(screen.formatted_total().is_none());
}

// ============================================================================
// Order Building Tests
// ============================================================================

#[tokio::test]
async fn test_adjusting_extras_and_quantity_moves_total() {
    let mock_server = MockServer::start().await;
    mount_load_routes(&mock_server, json!([])).await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;

    update(&mut screen, Action::IncrementExtra(1));
    update(&mut screen, Action::IncrementExtra(1));
    update(&mut screen, Action::IncrementQuantity);

    // (19.90 + 2 x 1.50) x 2
    assert_eq!(screen.formatted_total().as_deref(), Some("R$ 45,80"));
}

#[tokio::test]
async fn test_order_submit_happy_path() {
    let mock_server = MockServer::start().await;
    mount_load_routes(&mock_server, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;
    update(&mut screen, Action::IncrementExtra(1));

    let effect = update(&mut screen, Action::ConfirmOrder);
    assert!(matches!(effect, Effect::PostOrder(_)));
    assert!(screen.submitting);
    assert_eq!(screen.status_message, "Enviando pedido...");

    settle(&mut screen, effect).await;

    assert!(!screen.submitting);
    assert_eq!(screen.status_message, "Pedido confirmado!");
}

#[tokio::test]
async fn test_order_failure_reports_and_unlocks() {
    let mock_server = MockServer::start().await;
    mount_load_routes(&mock_server, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;

    let effect = update(&mut screen, Action::ConfirmOrder);
    settle(&mut screen, effect).await;

    assert!(!screen.submitting);
    assert_eq!(screen.status_message, "Falha ao enviar o pedido.");
}

#[tokio::test]
async fn test_second_confirm_while_sending_is_ignored() {
    let mock_server = MockServer::start().await;
    mount_load_routes(&mock_server, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;

    let first = update(&mut screen, Action::ConfirmOrder);
    let second = update(&mut screen, Action::ConfirmOrder);
    assert!(matches!(first, Effect::PostOrder(_)));
    assert_eq!(second, Effect::None);

    settle(&mut screen, first).await;
}

// ============================================================================
// Favorite Sync Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_favorite_round_trip() {
    let mock_server = MockServer::start().await;
    mount_load_routes(&mock_server, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/favorites"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/favorites/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;

    // The flag flips before the write lands
    let effect = update(&mut screen, Action::ToggleFavorite);
    assert!(screen.is_favorite);
    settle(&mut screen, effect).await;
    assert!(screen.is_favorite);

    let effect = update(&mut screen, Action::ToggleFavorite);
    assert!(!screen.is_favorite);
    settle(&mut screen, effect).await;
    assert!(!screen.is_favorite);
}

#[tokio::test]
async fn test_failed_favorite_save_rolls_back() {
    let mock_server = MockServer::start().await;
    mount_load_routes(&mock_server, json!([])).await;
    Mock::given(method("POST"))
        .and(path("/favorites"))
        .respond_with(ResponseTemplate::new(500).set_body_string("write failed"))
        .mount(&mock_server)
        .await;

    let mut screen = screen_for(&mock_server);
    load_screen(&mut screen).await;

    let effect = update(&mut screen, Action::ToggleFavorite);
    assert!(screen.is_favorite);

    settle(&mut screen, effect).await;

    assert!(!screen.is_favorite);
    assert_eq!(screen.status_message, "Falha ao salvar o favorito.");
}
