use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::recipe::parser::category_name;

/// Suffix shared by every recipe definition file.
pub const RECIPE_SUFFIX: &str = ".just";

#[derive(Debug, Clone)]
pub struct RecipeFile {
    pub path: PathBuf,
    pub file_name: String,
    pub category: String,
}

/// Find the recipe files directly inside `recipe_dir`.
///
/// Files whose name contains `exclude_keyword` are skipped. The result keeps
/// the order the filesystem reports; categories are sorted later. A missing
/// or unreadable directory yields an empty list.
pub fn discover_recipe_files(recipe_dir: &Path, exclude_keyword: &str) -> Vec<RecipeFile> {
    let mut files = Vec::new();

    if !recipe_dir.is_dir() {
        log::warn!("Recipe directory not found: {}", recipe_dir.display());
        return files;
    }

    for entry in WalkDir::new(recipe_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Failed to read directory entry: {}", err);
                None
            }
        })
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|f| f.to_str()) else {
            log::debug!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        if !file_name.ends_with(RECIPE_SUFFIX) {
            continue;
        }

        if !exclude_keyword.is_empty() && file_name.contains(exclude_keyword) {
            log::debug!("Skipping reserved recipe file: {}", file_name);
            continue;
        }

        files.push(RecipeFile {
            path: path.to_path_buf(),
            file_name: file_name.to_string(),
            category: category_name(file_name),
        });
    }

    log::info!(
        "Discovered {} recipe files in {}",
        files.len(),
        recipe_dir.display()
    );

    files
}
