use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder, Scope};
use std::sync::Arc;
use tracing::{debug, error};

use crate::storage::Backend;
use crate::utils::is_valid_keyword;

pub struct RedirectService {}

impl RedirectService {
    /// Resolve `GET /<keyword>` against the configured backend.
    pub async fn handle_redirect(
        path: web::Path<String>,
        backend: web::Data<Arc<dyn Backend>>,
    ) -> impl Responder {
        let keyword = path.into_inner();

        if !is_valid_keyword(&keyword) {
            // Covers the bare "/" request too: no default redirect, ever
            return Self::not_found_response();
        }

        match backend.get(&keyword).await {
            Ok(Some(link)) => HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
                .insert_header(("Location", link.target))
                .finish(),
            Ok(None) => {
                debug!("Redirect keyword not found: {}", keyword);
                Self::not_found_response()
            }
            Err(e) => {
                error!("Backend error during redirect lookup: {}", e);
                Self::error_response()
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }

    #[inline]
    fn error_response() -> HttpResponse {
        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .body("Internal Server Error")
    }
}

/// Redirect route configuration. Registered last so admin routes win.
pub fn redirect_routes() -> Scope {
    web::scope("")
        .route("/{path}*", web::get().to(RedirectService::handle_redirect))
        .route("/{path}*", web::head().to(RedirectService::handle_redirect))
}
