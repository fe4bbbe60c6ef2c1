use crate::models::Catalog;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file '{}': {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse catalog file '{}': {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn path(&self) -> &Path {
        match self {
            CatalogError::Read { path, .. } | CatalogError::Parse { path, .. } => path,
        }
    }
}

/// Reads and parses the backing catalog file. Called once per request; nothing is cached.
pub async fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_catalog(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Every entry must carry `id`, `name` and `url`; anything else fails to parse.
pub fn parse_catalog(raw: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(raw)
}
