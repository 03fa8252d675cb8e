//! # TitleBar Component
//!
//! Top status bar showing the dish, the favorite flag, and notifications.
//!
//! ## Responsibilities
//!
//! - Display the application name and the loaded dish
//! - Display the favorite indicator (`♥` favorited / `♡` not), the terminal
//!   stand-in for the header icon, toggled with `f`
//! - Display status messages (e.g., "Carregando...", "Pedido confirmado!")
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar holds no state of its own: every field is a prop copied out of
//! `Screen` at draw time, which keeps it trivial to test:
//!
//! ```rust,ignore
//! let title_bar = TitleBar {
//!     food_name: "Ao molho".to_string(),
//!     is_favorite: true,
//!     status_message: "Pronto.".to_string(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Props live in struct fields rather than render() parameters, since the
//! Component trait fixes the render() signature.
//!
//! ## Conditional Formatting
//!
//! What the bar shows depends on where the load stands:
//!
//! 1. **Loaded + status**: `"Prato — Ao molho ♥ | Pronto."`
//! 2. **Loaded, no status**: `"Prato — Ao molho ♥"`
//! 3. **Nothing loaded yet**: `"Prato ♡ | Carregando..."`

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::tui::component::Component;

/// Top status bar component showing the dish name, favorite flag, and status.
///
/// # Props
///
/// Every field arrives from the parent at draw time:
/// - `food_name`: The loaded dish name (empty until the fetch lands)
/// - `is_favorite`: Current favorite flag
/// - `status_message`: Transient status (e.g., "Enviando pedido...")
pub struct TitleBar {
    /// Loaded dish name, empty while loading
    pub food_name: String,
    /// Favorite flag, drives the heart indicator
    pub is_favorite: bool,
    /// Status message (e.g., "Carregando...", "Pedido confirmado!")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(food_name: String, is_favorite: bool, status_message: String) -> Self {
        Self {
            food_name,
            is_favorite,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Paints the single-line bar: application name, dish name once loaded,
    /// the heart indicator, and the status message when present.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let name_text = if self.food_name.is_empty() {
            "Prato".to_string()
        } else {
            format!("Prato — {}", self.food_name)
        };

        let (heart, heart_style) = if self.is_favorite {
            ("♥", Style::default().fg(Color::Red))
        } else {
            ("♡", Style::default().fg(Color::DarkGray))
        };

        let mut spans = vec![
            Span::raw(name_text),
            Span::raw(" "),
            Span::styled(heart, heart_style),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
