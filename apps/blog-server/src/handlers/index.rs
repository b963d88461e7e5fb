//! Front page.

use actix_web::{HttpResponse, web};

use blog_core::domain::DeletionMetrics;

use super::html;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET / - every article plus the deleted-comment metrics.
pub async fn list_articles(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let articles = state.articles.get_all_articles().await?;
    let metrics = DeletionMetrics::collect(&articles);

    let page = state.views.index(&articles, &metrics)?;
    Ok(html(page))
}
