use crate::services::fetch::CatalogClient;
use crate::web::view::GalleryView;
use crate::Config;
use anyhow::Result;

pub struct AppState {
    pub config: Config,
    pub view: GalleryView,
    pub client: CatalogClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let view = GalleryView::new(&config.view.title)?;
        let client = CatalogClient::new(&config.view.api_url, config.view.fetch_timeout())?;

        Ok(Self {
            config,
            view,
            client,
        })
    }
}
