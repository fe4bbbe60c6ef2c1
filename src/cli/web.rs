use crate::{web, Config};
use anyhow::Result;
use std::path::Path;

pub async fn run(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
    api_url: Option<String>,
) -> Result<()> {
    let mut config = Config::load_or_default(config_path)?;

    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.web_port = port;
    }
    if let Some(api_url) = api_url {
        config.view.api_url = api_url;
    }
    config.validate()?;

    let addr = config.server.web_addr();
    tracing::info!("Starting gallery view at http://{}/pictures", addr);

    web::serve_view(config, &addr).await
}
