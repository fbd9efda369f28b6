use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::recipe::discovery::discover_recipe_files;
use crate::recipe::parser::{LineMatchers, Recipe};

/// A named group of recipes parsed from one or more recipe files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub recipes: Vec<Recipe>,
}

/// All categories that have at least one recipe, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from `(category, recipes)` pairs in discovery order.
    ///
    /// Pairs sharing a category name are merged, keeping the first recipe of
    /// any repeated name. Categories left without recipes are dropped.
    pub fn from_parsed<I>(parsed: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Recipe>)>,
    {
        let mut grouped: BTreeMap<String, Vec<Recipe>> = BTreeMap::new();

        for (category, recipes) in parsed {
            let entry = grouped.entry(category).or_default();
            for recipe in recipes {
                if !entry.iter().any(|r| r.name == recipe.name) {
                    entry.push(recipe);
                }
            }
        }

        let categories = grouped
            .into_iter()
            .filter(|(_, recipes)| !recipes.is_empty())
            .map(|(name, recipes)| Category { name, recipes })
            .collect();

        Self { categories }
    }

    /// Discover and parse every recipe file in `recipe_dir`.
    ///
    /// Unreadable files are logged and skipped.
    pub fn load(recipe_dir: &Path, exclude_keyword: &str) -> Result<Self> {
        let matchers = LineMatchers::new()?;
        let files = discover_recipe_files(recipe_dir, exclude_keyword);

        let parsed = files.into_iter().filter_map(|file| match fs::read(&file.path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                let recipes = matchers.parse(&content);
                log::debug!(
                    "Parsed {} recipes from {} into '{}'",
                    recipes.len(),
                    file.file_name,
                    file.category
                );
                Some((file.category, recipes))
            }
            Err(err) => {
                log::warn!("Failed to read recipe file {}: {}", file.path.display(), err);
                None
            }
        });

        Ok(Self::from_parsed(parsed))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn recipe_count(&self) -> usize {
        self.categories.iter().map(|c| c.recipes.len()).sum()
    }
}
