//! HTTP handlers and route configuration.

mod article;
mod comment;
mod health;
mod index;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult, form_config, query_config};

/// Configure all application routes.
///
/// Each path is a single resource; methods without a route fall through to 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .app_data(form_config())
        .service(
            web::resource("/")
                .route(web::get().to(index::list_articles))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/article")
                .route(web::get().to(article::show_article))
                .route(web::post().to(article::create_article))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/comment")
                .route(web::post().to(comment::create_comment))
                .route(web::delete().to(comment::delete_comment))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/hello")
                .route(web::get().to(health::hello))
                .default_service(web::route().to(method_not_allowed)),
        );
}

async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

fn html(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page)
}

/// `location` is built from generated ids only, so it is always a valid header value.
fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
