//! Page rendering.
//!
//! Handlers only see [`PageRenderer`]; the concrete renderer is chosen when the
//! application state is built.

mod html;

use blog_core::domain::{Article, DeletionMetrics};

pub use html::HtmlRenderer;

/// Page rendering failure.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Renders the pages served by the handlers.
pub trait PageRenderer: Send + Sync {
    /// Article list with the deleted-comment metrics.
    fn index(&self, articles: &[Article], metrics: &DeletionMetrics)
    -> Result<String, RenderError>;

    /// A single article and its comment thread.
    fn article(&self, article: &Article) -> Result<String, RenderError>;
}
