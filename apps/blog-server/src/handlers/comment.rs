//! Comment handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::NewComment;
use blog_shared::dto::{CommentForm, CommentQuery, DeleteCommentQuery};

use super::see_other;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /comment?article_id=
pub async fn create_comment(
    state: web::Data<AppState>,
    query: web::Query<CommentQuery>,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let mut article = state.articles.get_article(&query.article_id).await?;

    let comment = state
        .articles
        .add_comment(
            &mut article,
            NewComment {
                name: form.name,
                text: form.comment,
            },
        )
        .await?;

    tracing::info!(article_id = %article.id, comment_id = %comment.id, "Comment posted");
    Ok(see_other(&format!("/article?id={}", article.id)))
}

/// DELETE /comment?article_id=&id=
pub async fn delete_comment(
    state: web::Data<AppState>,
    query: web::Query<DeleteCommentQuery>,
) -> AppResult<HttpResponse> {
    tracing::debug!(article_id = %query.article_id, comment_id = %query.id, "Deleting comment");

    let mut article = state.articles.get_article(&query.article_id).await?;
    state
        .articles
        .soft_delete_comment(&mut article, &query.id)
        .await?;

    Ok(HttpResponse::Ok().finish())
}
