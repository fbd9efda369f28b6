//! Recipe Picker - an interactive terminal menu for ujust recipes
//!
//! This library provides the core functionality for discovering recipe
//! definitions in `.just` files, grouping them into categories, browsing them
//! in a TUI and handing the chosen recipe off to the recipe runner.

pub mod config;
pub mod recipe;
pub mod ui;
