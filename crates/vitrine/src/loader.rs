//! Catalog loading.
//!
//! A catalog file is a JSON array of item objects:
//!
//! ```json
//! [{ "name": "Rake", "price": 18.5, "category": "Garden", "brand": "Dig" }]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use vitrine_seeker::{Catalog, Item};

/// Errors raised while reading a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },
}

/// Reads and validates the catalog stored at `path`.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_with_origin(&content, &path.display().to_string())?;
    info!(path = %path.display(), items = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// Parses a catalog from in-memory JSON.
pub fn parse_catalog(content: &str) -> Result<Catalog, LoadError> {
    parse_with_origin(content, "<input>")
}

fn parse_with_origin(content: &str, origin: &str) -> Result<Catalog, LoadError> {
    let items: Vec<Item> = serde_json::from_str(content).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    for (index, item) in items.iter().enumerate() {
        validate(item).map_err(|reason| LoadError::InvalidItem { index, reason })?;
    }

    debug!(origin, items = items.len(), "parsed catalog");
    Ok(Catalog::new(items))
}

fn validate(item: &Item) -> Result<(), String> {
    if !item.price.is_finite() {
        return Err(format!("price of '{}' is not a finite number", item.name));
    }
    if item.price < 0.0 {
        return Err(format!(
            "price of '{}' is negative ({})",
            item.name, item.price
        ));
    }
    Ok(())
}
