use crate::services::catalog::{self, CatalogError};
use crate::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Ok,
    Warn,
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "\x1b[32m✓ OK\x1b[0m"),
            CheckStatus::Warn => write!(f, "\x1b[33m⚠ WARN\x1b[0m"),
            CheckStatus::Fail => write!(f, "\x1b[31m✗ FAIL\x1b[0m"),
        }
    }
}

#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub detail: String,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            detail: detail.into(),
        }
    }
}

pub async fn run(config_path: &Path, catalog: Option<PathBuf>) -> Result<()> {
    println!("\n  Gallery Check\n");

    let mut config = Config::load_or_default(config_path)?;
    if let Some(catalog) = catalog {
        config.catalog.path = catalog.to_string_lossy().into_owned();
    }

    let results = check_catalog(Path::new(&config.catalog.path)).await;
    print_results(&results);

    if results.iter().any(|r| r.status == CheckStatus::Fail) {
        println!("\n  \x1b[31mThe catalog service would answer 500 for this file.\x1b[0m\n");
        anyhow::bail!("catalog check failed for {}", config.catalog.path);
    }

    println!("\n  \x1b[32mCatalog is ready to serve.\x1b[0m\n");
    Ok(())
}

/// Runs the same load the endpoint performs, then reports on what it found.
pub async fn check_catalog(path: &Path) -> Vec<CheckResult> {
    let mut results = Vec::new();

    let catalog = match catalog::load_catalog(path).await {
        Ok(c) => {
            results.push(CheckResult::new(
                "Catalog file",
                CheckStatus::Ok,
                format!("Loaded from {}", path.display()),
            ));
            c
        }
        Err(e @ CatalogError::Read { .. }) => {
            results.push(CheckResult::new("Catalog file", CheckStatus::Fail, e.to_string()));
            return results;
        }
        Err(e @ CatalogError::Parse { .. }) => {
            results.push(CheckResult::new("Catalog file", CheckStatus::Ok, "Readable"));
            results.push(CheckResult::new("Catalog JSON", CheckStatus::Fail, e.to_string()));
            return results;
        }
    };

    if catalog.is_empty() {
        results.push(CheckResult::new(
            "Images",
            CheckStatus::Warn,
            "Catalog is empty; the gallery will show its empty state",
        ));
    } else {
        results.push(CheckResult::new(
            "Images",
            CheckStatus::Ok,
            format!("{} image(s)", catalog.len()),
        ));
    }

    let dupes = catalog.duplicate_ids();
    if dupes.is_empty() {
        results.push(CheckResult::new("Unique ids", CheckStatus::Ok, "No duplicates"));
    } else {
        let ids: Vec<String> = dupes.iter().map(|id| id.to_string()).collect();
        results.push(CheckResult::new(
            "Unique ids",
            CheckStatus::Warn,
            format!("Duplicate id(s): {}", ids.join(", ")),
        ));
    }

    let blank = catalog
        .images
        .iter()
        .filter(|i| i.name.trim().is_empty() || i.url.trim().is_empty())
        .count();
    if blank > 0 {
        results.push(CheckResult::new(
            "Names and urls",
            CheckStatus::Warn,
            format!("{} image(s) with a blank name or url", blank),
        ));
    }

    let unsafe_urls: Vec<String> = catalog
        .images
        .iter()
        .filter(|i| !i.url.trim().is_empty() && !i.has_web_url())
        .map(|i| i.id.to_string())
        .collect();
    if !unsafe_urls.is_empty() {
        results.push(CheckResult::new(
            "Url schemes",
            CheckStatus::Warn,
            format!(
                "Image id(s) {} use a url that is neither http(s) nor a path",
                unsafe_urls.join(", ")
            ),
        ));
    }

    results
}

fn print_results(results: &[CheckResult]) {
    let max_name_len = results.iter().map(|r| r.name.len()).max().unwrap_or(20);

    for (i, result) in results.iter().enumerate() {
        println!(
            "  {:>2}. {:<width$}  {}  {}",
            i + 1,
            result.name,
            result.status,
            result.detail,
            width = max_name_len,
        );
    }
}
