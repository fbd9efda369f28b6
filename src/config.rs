//! # Picker Options
//!
//! Runtime options for the picker. There is no configuration file: every
//! value has a fixed default matching the system ujust layout, and the binary
//! lets each one be overridden from the command line.

use std::path::PathBuf;

/// Directory holding the system recipe files.
pub const DEFAULT_RECIPE_DIR: &str = "/usr/share/ublue-os/just";

/// Command that runs a recipe given its name as the sole argument.
pub const DEFAULT_RUNNER: &str = "ujust";

/// Files whose name contains this keyword hold the picker's own recipes.
pub const DEFAULT_EXCLUDE_KEYWORD: &str = "picker";

/// Options controlling where recipes come from and how they are run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    pub recipe_dir: PathBuf,
    pub runner: String,
    pub exclude_keyword: String,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            recipe_dir: PathBuf::from(DEFAULT_RECIPE_DIR),
            runner: DEFAULT_RUNNER.to_string(),
            exclude_keyword: DEFAULT_EXCLUDE_KEYWORD.to_string(),
        }
    }
}
