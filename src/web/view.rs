//! Server-side rendering of the gallery.
//!
//! The view has three observable outcomes, captured by [`GalleryState`]: a pending
//! skeleton grid, a grid of image cards, or a single empty-state message.

use crate::models::Image;
use tera::{Context, Tera};

pub const EMPTY_STATE_MESSAGE: &str = "No images found — check the API server";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryState {
    /// The fetch is in flight; render this many placeholder cards.
    Pending { placeholders: usize },
    Loaded(Vec<Image>),
    /// Either the catalog was empty or the fetch failed.
    Empty,
}

impl GalleryState {
    pub fn resolve(images: Vec<Image>) -> Self {
        if images.is_empty() {
            GalleryState::Empty
        } else {
            GalleryState::Loaded(images)
        }
    }
}

pub struct GalleryView {
    templates: Tera,
    title: String,
}

impl GalleryView {
    pub fn new(title: &str) -> tera::Result<Self> {
        let mut templates = Tera::default();

        templates.set_escape_fn(escape_html);
        templates.add_raw_templates(vec![
            ("css/gallery.css", include_str!("../../templates/css/gallery.css")),
            ("gallery/shell.html", include_str!("../../templates/gallery/shell.html")),
            ("gallery/resolved.html", include_str!("../../templates/gallery/resolved.html")),
            ("gallery/skeleton.html", include_str!("../../templates/gallery/skeleton.html")),
            ("gallery/grid.html", include_str!("../../templates/gallery/grid.html")),
            ("gallery/empty.html", include_str!("../../templates/gallery/empty.html")),
        ])?;

        Ok(Self {
            templates,
            title: title.to_string(),
        })
    }

    /// Renders the fragment for a single state, without page chrome.
    pub fn render(&self, state: &GalleryState) -> tera::Result<String> {
        let mut ctx = Context::new();
        match state {
            GalleryState::Pending { placeholders } => {
                ctx.insert("placeholders", placeholders);
                self.templates.render("gallery/skeleton.html", &ctx)
            }
            GalleryState::Loaded(images) => {
                ctx.insert("images", images);
                self.templates.render("gallery/grid.html", &ctx)
            }
            GalleryState::Empty => {
                ctx.insert("message", EMPTY_STATE_MESSAGE);
                self.templates.render("gallery/empty.html", &ctx)
            }
        }
    }

    /// Opening half of the page: document head, heading and the skeleton grid.
    pub fn render_shell(&self, placeholders: usize) -> tera::Result<String> {
        let fallback = self.render(&GalleryState::Pending { placeholders })?;

        let mut ctx = Context::new();
        ctx.insert("title", &self.title);
        ctx.insert("fallback", &fallback);
        self.templates.render("gallery/shell.html", &ctx)
    }

    /// Closing half of the page. Hides the skeleton and shows the resolved content.
    pub fn render_resolved(&self, state: &GalleryState) -> tera::Result<String> {
        let content = self.render(state)?;

        let mut ctx = Context::new();
        ctx.insert("content", &content);
        self.templates.render("gallery/resolved.html", &ctx)
    }

    /// Both halves in one string, for callers that do not stream.
    pub fn render_page(&self, placeholders: usize, state: &GalleryState) -> tera::Result<String> {
        let mut page = self.render_shell(placeholders)?;
        page.push_str(&self.render_resolved(state)?);
        Ok(page)
    }
}

// Tera's built-in escaper also rewrites '/' to "&#x2F;". Browsers decode that inside
// attributes, but the overlay and the markup would no longer carry the catalog `url`
// byte-for-byte, so a card could not be matched against its catalog entry by text.
// '/' has no meaning inside quoted attributes or text nodes; only these five do.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
