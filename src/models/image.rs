use serde::{Deserialize, Serialize};

/// One catalog entry. `url` is both the image source and the outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl Image {
    /// True for http(s) URLs and scheme-less paths; false for `javascript:`, `data:` and
    /// other schemes a browser would not fetch as an image.
    pub fn has_web_url(&self) -> bool {
        match url::Url::parse(&self.url) {
            Ok(url) => matches!(url.scheme(), "http" | "https"),
            Err(url::ParseError::RelativeUrlWithoutBase) => true,
            Err(_) => false,
        }
    }
}

/// The `{ "images": [...] }` envelope served by the catalog endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub images: Vec<Image>,
}

impl Catalog {
    pub fn new(images: Vec<Image>) -> Self {
        Self { images }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Ids that appear more than once, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes = Vec::new();
        for image in &self.images {
            if !seen.insert(image.id) && !dupes.contains(&image.id) {
                dupes.push(image.id);
            }
        }
        dupes
    }
}
