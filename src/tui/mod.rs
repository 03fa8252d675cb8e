//! # TUI Adapter
//!
//! Everything terminal-specific lives here: drawing the order screen,
//! reading keys and mouse wheel input, and turning both into
//! `core::Action` values for the reducer. No other module imports
//! ratatui or crossterm, so the core stays reusable behind a different
//! front end.
//!
//! ## Redraw Strategy
//!
//! Frames are drawn only when something can have changed:
//!
//! - **Animating** (initial load, order in flight): draws every ~80ms so the
//!   spinner stays smooth.
//! - **Idle**: sleeps up to 500ms, only redraws on input events, background
//!   completions, or terminal resize.
//!
//! ## Background I/O
//!
//! Remote calls never run on the event loop. They are spawned onto tokio
//! tasks that report back by sending `Action`s over an `mpsc` channel the
//! loop drains between frames. The two initial reads (food + favorites) run
//! concurrently inside one task; each completion is sent the moment it
//! lands, so their order is never observable.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::{mpsc, Arc};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{debug, info, warn};
use tui_scrollview::ScrollViewState;

use crate::api::{Food, HttpMenuApi, MenuApi, OrderPayload};
use crate::core::action::{update, Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::state::Screen;
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};

/// Which row the `+`/`-` keys act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// An extras row, by index into the ledger.
    Extra(usize),
    /// The order quantity stepper in the total bar.
    Quantity,
}

/// Presentation state the reducer never sees: row selection and scroll.
pub struct TuiState {
    /// Selected row: `0..extras.len()` are extras, one past the end is the
    /// quantity stepper. Stored as a plain index so it stays valid however
    /// many extras the loaded record brings.
    pub selected_row: usize,
    pub scroll_state: ScrollViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            selected_row: 0,
            scroll_state: ScrollViewState::default(),
        }
    }

    /// Maps the stored row index onto the current ledger size. Anything past
    /// the last extra is the quantity stepper, including the empty-ledger
    /// case.
    pub fn selection(&self, extras_len: usize) -> Selection {
        if self.selected_row < extras_len {
            Selection::Extra(self.selected_row)
        } else {
            Selection::Quantity
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self, extras_len: usize) {
        // The quantity row sits one past the last extra.
        self.selected_row = (self.selected_row + 1).min(extras_len);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn MenuApi> = Arc::new(HttpMenuApi::new(config.base_url.clone()));
    let mut screen = Screen::new(client.clone(), config.food_id);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Background tasks report back over this channel
    let (tx, rx) = mpsc::channel();

    spawn_screen_load(client, config.food_id, tx.clone());

    // Spinner clock
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // first frame always draws

    loop {
        let animating = screen.loading() || screen.submitting;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &screen, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Poll briefly while the spinner runs (~12fps), longer when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Drain every queued input before drawing again
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // The redraw flag above already covers a resize
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    let effect = update(&mut screen, Action::Quit);
                    if handle_effect(effect, &screen.client, &tx) {
                        should_quit = true;
                    }
                }
                TuiEvent::ScrollUp => tui.scroll_state.scroll_up(),
                TuiEvent::ScrollDown => tui.scroll_state.scroll_down(),
                TuiEvent::ScrollPageUp => tui.scroll_state.scroll_page_up(),
                TuiEvent::ScrollPageDown => tui.scroll_state.scroll_page_down(),
                TuiEvent::CursorUp => tui.move_selection_up(),
                TuiEvent::CursorDown => tui.move_selection_down(screen.extras.len()),
                TuiEvent::Increment => {
                    let action = match tui.selection(screen.extras.len()) {
                        Selection::Extra(index) => Action::IncrementExtra(screen.extras[index].id),
                        Selection::Quantity => Action::IncrementQuantity,
                    };
                    let effect = update(&mut screen, action);
                    if handle_effect(effect, &screen.client, &tx) {
                        should_quit = true;
                    }
                }
                TuiEvent::Decrement => {
                    let action = match tui.selection(screen.extras.len()) {
                        Selection::Extra(index) => Action::DecrementExtra(screen.extras[index].id),
                        Selection::Quantity => Action::DecrementQuantity,
                    };
                    let effect = update(&mut screen, action);
                    if handle_effect(effect, &screen.client, &tx) {
                        should_quit = true;
                    }
                }
                TuiEvent::ToggleFavorite => {
                    let effect = update(&mut screen, Action::ToggleFavorite);
                    if handle_effect(effect, &screen.client, &tx) {
                        should_quit = true;
                    }
                }
                TuiEvent::Submit => {
                    let effect = update(&mut screen, Action::ConfirmOrder);
                    if handle_effect(effect, &screen.client, &tx) {
                        should_quit = true;
                    }
                }
            }
        }

        if should_quit {
            break;
        }

        // Feed background completions (load results, write outcomes) through
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("background action: {:?}", action);
            let effect = update(&mut screen, action);
            if handle_effect(effect, &screen.client, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Runs the I/O an `Effect` asks for. Returns true when the host should
/// quit.
fn handle_effect(effect: Effect, client: &Arc<dyn MenuApi>, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::SaveFavorite(food) => {
            spawn_favorite_save(client.clone(), food, tx.clone());
            false
        }
        Effect::RemoveFavorite(id) => {
            spawn_favorite_remove(client.clone(), id, tx.clone());
            false
        }
        Effect::PostOrder(payload) => {
            spawn_order_post(client.clone(), payload, tx.clone());
            false
        }
        Effect::Quit => true,
    }
}

/// Issues the two initial reads concurrently. Each completion is sent as its
/// own action as soon as it lands; the reducer treats the two results
/// independently, so their order does not matter.
fn spawn_screen_load(client: Arc<dyn MenuApi>, food_id: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning initial load (food id {food_id})");
    let tx_favorites = tx.clone();
    tokio::spawn(async move {
        let food_read = async {
            match client.fetch_food(food_id).await {
                Ok(food) => {
                    if tx.send(Action::FoodLoaded(food)).is_err() {
                        warn!("Failed to send FoodLoaded: receiver dropped");
                    }
                }
                Err(e) => {
                    warn!("Food load failed: {e}");
                    if tx.send(Action::FoodLoadFailed(e.to_string())).is_err() {
                        warn!("Failed to send FoodLoadFailed: receiver dropped");
                    }
                }
            }
        };
        let favorites_read = async {
            match client.list_favorites().await {
                Ok(favorites) => {
                    if tx_favorites.send(Action::FavoritesLoaded(favorites)).is_err() {
                        warn!("Failed to send FavoritesLoaded: receiver dropped");
                    }
                }
                Err(e) => {
                    warn!("Favorites load failed: {e}");
                    if tx_favorites
                        .send(Action::FavoritesLoadFailed(e.to_string()))
                        .is_err()
                    {
                        warn!("Failed to send FavoritesLoadFailed: receiver dropped");
                    }
                }
            }
        };
        futures::join!(food_read, favorites_read);
    });
}

fn spawn_favorite_save(client: Arc<dyn MenuApi>, food: Food, tx: mpsc::Sender<Action>) {
    info!("Spawning favorite save (food id {})", food.id);
    tokio::spawn(async move {
        let result = match client.create_favorite(&food).await {
            Ok(()) => Action::FavoriteSynced { favorited: true },
            Err(e) => {
                warn!("Favorite save failed: {e}");
                Action::FavoriteSyncFailed {
                    favorited: true,
                    error: e.to_string(),
                }
            }
        };
        if tx.send(result).is_err() {
            warn!("Failed to send favorite save result: receiver dropped");
        }
    });
}

fn spawn_favorite_remove(client: Arc<dyn MenuApi>, food_id: u64, tx: mpsc::Sender<Action>) {
    info!("Spawning favorite removal (food id {food_id})");
    tokio::spawn(async move {
        let result = match client.delete_favorite(food_id).await {
            Ok(()) => Action::FavoriteSynced { favorited: false },
            Err(e) => {
                warn!("Favorite removal failed: {e}");
                Action::FavoriteSyncFailed {
                    favorited: false,
                    error: e.to_string(),
                }
            }
        };
        if tx.send(result).is_err() {
            warn!("Failed to send favorite removal result: receiver dropped");
        }
    });
}

fn spawn_order_post(client: Arc<dyn MenuApi>, order: OrderPayload, tx: mpsc::Sender<Action>) {
    info!("Spawning order submission (product id {})", order.product_id);
    tokio::spawn(async move {
        let result = match client.submit_order(&order).await {
            Ok(()) => Action::OrderAccepted,
            Err(e) => {
                warn!("Order submission failed: {e}");
                Action::OrderFailed(e.to_string())
            }
        };
        if tx.send(result).is_err() {
            warn!("Failed to send order result: receiver dropped");
        }
    });
}
