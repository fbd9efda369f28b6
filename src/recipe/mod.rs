//! # Recipe Module
//!
//! This module provides functionality for discovering, parsing, and running
//! ujust recipes.
//!
//! ## Pipeline
//!
//! | Step | Function |
//! |------|----------|
//! | Find `*.just` files | [`discovery::discover_recipe_files`] |
//! | Derive category labels | [`parser::category_name`] |
//! | Extract recipes | [`parser::parse_recipes`] |
//! | Group and sort | [`catalog::Catalog::load`] |
//! | Run the chosen recipe | [`executor::run_recipe`] |
//!

pub mod catalog;
pub mod discovery;
pub mod executor;
pub mod parser;

pub use catalog::{Catalog, Category};
pub use discovery::{discover_recipe_files, RecipeFile, RECIPE_SUFFIX};
pub use executor::{announce, run_recipe};
pub use parser::{category_name, parse_recipes, LineMatchers, Recipe};
