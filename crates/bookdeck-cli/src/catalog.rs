use anyhow::{Context, Result, bail};
use bookdeck_types::{Catalog, CatalogFile};
use std::path::{Path, PathBuf};

use crate::config::Config;

/// Resolve the catalog path: `--catalog` flag, then the BOOKDECK_CATALOG
/// environment variable, then the config
pub fn resolve_path(explicit: Option<&Path>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var("BOOKDECK_CATALOG") {
        return Ok(PathBuf::from(env_path));
    }

    if let Some(path) = &config.catalog {
        return Ok(path.clone());
    }

    bail!(
        "no catalog configured; pass --catalog <FILE>, set BOOKDECK_CATALOG, \
         or run 'bookdeck init --catalog <FILE>'"
    )
}

/// Load and validate a catalog document
pub fn load(explicit: Option<&Path>, config: &Config) -> Result<Catalog> {
    let path = resolve_path(explicit, config)?;
    load_file(&path)
}

pub fn load_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let file: CatalogFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    let catalog = Catalog::try_from(file)
        .with_context(|| format!("invalid catalog {}", path.display()))?;
    Ok(catalog)
}
