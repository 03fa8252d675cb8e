//! # Core Screen Logic
//!
//! Everything the food details screen decides, with no terminal and no
//! network in sight. The reducer answers every question as plain data.
//!
//! ```text
//!         ┌───────────────────────────┐
//!         │           CORE            │
//!         │       (this module)       │
//!         │                           │
//!         │   • Screen   (state)      │
//!         │   • Action   (events)     │
//!         │   • update() (reducer)    │
//!         │   • money    (pricing)    │
//!         │                           │
//!         │   No I/O. No UI. Pure.    │
//!         └────────────┬──────────────┘
//!                      │
//!           ┌──────────┴──────────┐
//!           ▼                     ▼
//!    ┌─────────────┐       ┌─────────────┐
//!    │     TUI     │       │     API     │
//!    │   adapter   │       │  (effects   │
//!    │  (ratatui)  │       │    only)    │
//!    └─────────────┘       └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Screen` struct, all screen state in one place
//! - [`action`]: The `Action` enum + reducer, everything that can happen
//! - [`money`]: Exact decimal totals and Brazilian currency formatting
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy

pub mod action;
pub mod config;
pub mod money;
pub mod state;
