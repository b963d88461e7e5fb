//! Article handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::NewArticle;
use blog_shared::dto::{ArticleForm, ArticleQuery};

use super::{html, see_other};
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /article?id=
pub async fn show_article(
    state: web::Data<AppState>,
    query: web::Query<ArticleQuery>,
) -> AppResult<HttpResponse> {
    let article = state.articles.get_article(&query.id).await?;

    let page = state.views.article(&article)?;
    Ok(html(page))
}

/// POST /article
pub async fn create_article(
    state: web::Data<AppState>,
    form: web::Form<ArticleForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    let article = state
        .articles
        .create_article(NewArticle {
            title: form.title,
            author: form.author,
            content: form.content,
        })
        .await?;

    tracing::info!(article_id = %article.id, "Article published");
    Ok(see_other("/"))
}
