//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is stateless (props-based): it is created fresh each
//! frame from `Screen` + `TuiState` and renders what it is given. Persistent
//! presentation state (selection, scroll offset) lives in `TuiState`; domain
//! state lives in `Screen`. Components never reach into either directly: the
//! parent passes props, which keeps dependencies explicit and the components
//! testable against a `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── title_bar.rs    (top bar: dish name, favorite heart, status)
//! ├── food_card.rs    (name, description, unit price)
//! ├── extras_list.rs  ("Adicionais" rows with steppers)
//! └── total_bar.rs    (total, quantity stepper, key hints)
//! ```

mod extras_list;
mod food_card;
mod title_bar;
mod total_bar;

pub use extras_list::ExtrasList;
pub use food_card::FoodCard;
pub use title_bar::TitleBar;
pub use total_bar::TotalBar;
