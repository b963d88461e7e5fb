//! Liveness probe.

use actix_web::HttpResponse;

/// GET /hello
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().body("Hello, World!")
}
