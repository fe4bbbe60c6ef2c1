use crate::{web, Config};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub async fn run(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
    catalog: Option<PathBuf>,
) -> Result<()> {
    let mut config = Config::load_or_default(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.api_port = port;
    }
    if let Some(catalog) = catalog {
        config.catalog.path = catalog.to_string_lossy().into_owned();
    }
    config.validate()?;

    let addr = config.server.api_addr();
    tracing::info!(catalog = %config.catalog.path, "Starting catalog service at http://{}", addr);

    web::serve_api(config, &addr).await
}
