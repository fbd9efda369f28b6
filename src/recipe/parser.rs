//! # Recipe Parser
//!
//! Extracts recipes from the text of a `.just` file by scanning it line by
//! line. No justfile evaluation takes place; two line matchers classify each
//! line as a comment, a recipe declaration, or neither.
//!
//! ```just
//! # Install a package
//! install-pkg:
//!     echo hi
//!
//! _hidden:
//!     echo no
//! ```
//!
//! The comment directly describes the next recipe that is kept. Recipes whose
//! name starts with `_`, or whose declaration line mentions `alias` or
//! `[private]`, are hidden.

use anyhow::{Context, Result};
use regex::Regex;

use crate::recipe::discovery::RECIPE_SUFFIX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub description: String,
}

/// The two line classifiers used by [`parse_recipes`].
#[derive(Debug, Clone)]
pub struct LineMatchers {
    comment: Regex,
    declaration: Regex,
}

impl LineMatchers {
    pub fn new() -> Result<Self> {
        let comment =
            Regex::new(r"^\s*#\s*(.*)").context("Failed to compile comment regex pattern")?;
        let declaration = Regex::new(r"^\s*([a-zA-Z0-9_-]+)\s*:\s*.*")
            .context("Failed to compile recipe declaration regex pattern")?;

        Ok(Self {
            comment,
            declaration,
        })
    }

    /// Text following `#` on a comment line.
    pub fn comment<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.comment
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }

    /// Recipe name on a declaration line (`name:` with optional whitespace).
    pub fn declaration<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.declaration
            .captures(line)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
    }

    /// Parse the content of one recipe file into its visible recipes, in file order.
    pub fn parse(&self, content: &str) -> Vec<Recipe> {
        let mut recipes: Vec<Recipe> = Vec::new();
        let mut pending_description = String::new();

        for line in content.lines() {
            if let Some(text) = self.comment(line) {
                pending_description = text.to_string();
                continue;
            }

            let Some(name) = self.declaration(line) else {
                continue;
            };

            if is_hidden(name, line) {
                log::debug!("Skipping hidden recipe: {}", name);
                pending_description.clear();
                continue;
            }

            let description = std::mem::take(&mut pending_description);
            if recipes.iter().any(|r| r.name == name) {
                log::debug!("Skipping duplicate recipe: {}", name);
                continue;
            }

            recipes.push(Recipe {
                name: name.to_string(),
                description,
            });
        }

        recipes
    }
}

fn is_hidden(name: &str, line: &str) -> bool {
    name.starts_with('_') || line.contains("alias") || line.contains("[private]")
}

/// Parse recipe file content with a fresh set of matchers.
pub fn parse_recipes(content: &str) -> Result<Vec<Recipe>> {
    Ok(LineMatchers::new()?.parse(content))
}

/// Derive a category label from a recipe file name.
///
/// Examples:
///   - "10-my-tools.just" -> "My Tools"
///   - "dev.just" -> "Dev"
///   - "82-bazzite-apps.just" -> "Bazzite Apps"
pub fn category_name(file_name: &str) -> String {
    let stem = file_name.strip_suffix(RECIPE_SUFFIX).unwrap_or(file_name);
    let stem = strip_ordering_prefix(stem);

    stem.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    let mut result = first.to_uppercase().to_string();
                    result.push_str(chars.as_str());
                    result
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// "10-system" -> "system"; a run of digits without a hyphen is kept.
fn strip_ordering_prefix(stem: &str) -> &str {
    let rest = stem.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == stem.len() {
        return stem;
    }
    rest.strip_prefix('-').unwrap_or(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matchers() -> LineMatchers {
        LineMatchers::new().unwrap()
    }

    #[test]
    fn test_comment_matcher() {
        let m = matchers();
        assert_eq!(m.comment("# Install a package"), Some("Install a package"));
        assert_eq!(m.comment("   #   indented"), Some("indented"));
        assert_eq!(m.comment("#"), Some(""));
        assert_eq!(m.comment("build: # not a comment"), None);
        assert_eq!(m.comment("echo hi"), None);
    }

    #[test]
    fn test_declaration_matcher() {
        let m = matchers();
        assert_eq!(m.declaration("install-pkg:"), Some("install-pkg"));
        assert_eq!(m.declaration("  build_all : deps"), Some("build_all"));
        assert_eq!(m.declaration("test2:"), Some("test2"));
        assert_eq!(m.declaration("deploy env=\"prod\":"), None);
        assert_eq!(m.declaration("    echo hi"), None);
        assert_eq!(m.declaration(""), None);
    }

    #[test]
    fn test_parse_simple_file() {
        let content = "# Install a package\ninstall-pkg:\n    echo hi\n_hidden:\n    echo no\n";
        let recipes = parse_recipes(content).unwrap();

        assert_eq!(
            recipes,
            vec![Recipe {
                name: "install-pkg".to_string(),
                description: "Install a package".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_without_comment_has_empty_description() {
        let recipes = parse_recipes("build:\n    cargo build\n").unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].description, "");
    }

    #[test]
    fn test_parse_comment_consumed_once() {
        let content = "# Build it\nbuild:\n    make\ntest:\n    make test\n";
        let recipes = parse_recipes(content).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].description, "Build it");
        assert_eq!(recipes[1].description, "");
    }

    #[test]
    fn test_parse_later_comment_overwrites_earlier() {
        let content = "# first\n# second\nbuild:\n";
        let recipes = parse_recipes(content).unwrap();
        assert_eq!(recipes[0].description, "second");
    }

    #[test]
    fn test_parse_description_survives_unrelated_lines() {
        let content = "# Update the system\n\nset shell := [\"bash\"]\n\nupdate:\n";
        let recipes = parse_recipes(content).unwrap();

        // `set shell :=` does not match the declaration pattern
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "update");
        assert_eq!(recipes[0].description, "Update the system");
    }

    #[test]
    fn test_parse_hidden_recipes() {
        let content = r#"_private-helper:
    echo helper
alias up := update
[private]
internal: # [private]
    echo internal
update:
    echo update
"#;
        let recipes = parse_recipes(content).unwrap();
        let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["update"]);
    }

    #[test]
    fn test_parse_alias_anywhere_on_line_hides_recipe() {
        let recipes = parse_recipes("setup: # creates an alias\n").unwrap();
        assert!(recipes.is_empty());
    }

    #[test]
    fn test_parse_skipped_recipe_clears_description() {
        let content = "# Helper only\n_helper:\n    true\nvisible:\n";
        let recipes = parse_recipes(content).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "visible");
        assert_eq!(recipes[0].description, "");
    }

    #[test]
    fn test_parse_duplicate_names_keep_first() {
        let content = "# one\nbuild:\n# two\nbuild:\n";
        let recipes = parse_recipes(content).unwrap();

        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].description, "one");
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let content = "zeta:\nalpha:\nmid:\n";
        let recipes = parse_recipes(content).unwrap();
        let names: Vec<&str> = recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_recipes("").unwrap().is_empty());
        assert!(parse_recipes("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_category_name() {
        assert_eq!(category_name("10-my-tools.just"), "My Tools");
        assert_eq!(category_name("dev.just"), "Dev");
        assert_eq!(category_name("82-bazzite-apps.just"), "Bazzite Apps");
        assert_eq!(category_name("system.just"), "System");
    }

    #[test]
    fn test_category_name_keeps_inner_case() {
        assert_eq!(category_name("nvidia-GPU.just"), "Nvidia GPU");
    }

    #[test]
    fn test_category_name_digits_without_hyphen() {
        assert_eq!(category_name("2024.just"), "2024");
        assert_eq!(category_name("3d-tools.just"), "3d Tools");
        assert_eq!(category_name("31-3d.just"), "3d");
    }

    #[test]
    fn test_category_name_without_suffix() {
        assert_eq!(category_name("05-gaming"), "Gaming");
    }
}
