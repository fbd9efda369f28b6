//! # UI Module
//!
//! This module provides the terminal user interface for the recipe picker.
//!
//! ## Components
//!
//! - [`Picker`] - Navigation state (current category, current recipe, viewport)
//! - [`mod@render`] - Projects the picker state into a bordered frame
//! - [`theme`] - Named text decorations
//! - [`wrap`] - Word wrapping for the description panel
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │ Available ujust recipes                          │
//! │ ──────────────────────────────────────────────── │
//! │ ← Apps              System              Tools →  │
//! │ ← → Change Category | ↑ ↓ Navigate Recipes | …   │
//! │ ──────────────────────────────────────────────── │
//! │                                                  │
//! │ ▶ update                                         │
//! │   clean                                          │
//! │                                                  │
//! │ ──────────────────────────────────────────────── │
//! │ Selected: update                                 │
//! │ Update the system and all flatpaks               │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod render;
pub mod theme;
pub mod wrap;

pub use app::{action_for, Action, Outcome, Picker};
pub use render::render;
