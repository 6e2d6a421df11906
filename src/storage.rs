use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::types::{FilterSelection, Scholarship};

/// Load the merged listing snapshot. Read once at startup; the catalog is
/// immutable for the life of the process.
pub fn load_scholarships(root: &str) -> Result<Vec<Scholarship>> {
    let path = PathBuf::from(root).join("data/scholarships_merged.json");
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read scholarship snapshot from {:?}", path))?;

    let scholarships: Vec<Scholarship> =
        serde_json::from_str(&content).with_context(|| "Failed to parse scholarship snapshot")?;

    Ok(scholarships)
}

/// Load the user's filter selection. A missing file means no constraints.
pub fn load_filter_selection(root: &str) -> Result<FilterSelection> {
    let path = PathBuf::from(root).join("filters.yml");

    if !path.exists() {
        return Ok(FilterSelection::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read filter selection from {:?}", path))?;

    let filters: FilterSelection =
        serde_yaml::from_str(&content).with_context(|| "Failed to parse filters.yml")?;

    Ok(filters)
}
