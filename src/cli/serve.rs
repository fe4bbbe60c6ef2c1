use crate::{web, Config};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, api_url: Option<String>) -> Result<()> {
    let mut config = Config::load_or_default(config_path)?;

    if let Some(api_url) = api_url {
        config.view.api_url = api_url;
    }
    config.validate()?;

    tracing::info!(
        "Starting catalog service at http://{} and gallery view at http://{}/pictures",
        config.server.api_addr(),
        config.server.web_addr()
    );

    web::serve_all(config).await
}
