//! Admin API: link CRUD and listing
//!
//! The whole surface is a deployment-time capability: when admin mode is
//! off the scope is replaced with an unconditional 404 (see
//! [`admin_disabled_routes`]), so none of these handlers can be reached.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Responder, Scope};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, trace};

use crate::config::Config;
use crate::storage::{Backend, Link};
use crate::utils::{is_valid_keyword, resolve_host, source_url};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Payload for `POST /admin/link`.
#[derive(Debug, Deserialize)]
pub struct PostNewLink {
    pub keyword: String,
    pub target: String,
}

/// Payload for `PUT /admin/link/{keyword}`.
#[derive(Debug, Deserialize)]
pub struct PutLink {
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub keyword: String,
    pub target: String,
}

/// Response for a created or updated link, including the canonical source
/// URL that now resolves to it.
#[derive(Debug, Serialize)]
pub struct CreatedLinkResponse {
    pub keyword: String,
    pub target: String,
    pub source: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        LinkResponse {
            keyword: link.keyword,
            target: link.target,
        }
    }
}

fn success_response<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok()
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse { code: 0, data })
}

fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ErrorResponse {
            code: status.as_u16(),
            message: message.to_string(),
        })
}

/// Validate a mutation payload. Only non-emptiness is enforced here; target
/// scheme restrictions are deployment policy, not store rules.
fn validate_mutation(keyword: &str, target: &str) -> Option<HttpResponse> {
    if !is_valid_keyword(keyword) {
        return Some(error_response(
            StatusCode::BAD_REQUEST,
            "Keyword must be non-empty and URL-path-safe",
        ));
    }
    if target.trim().is_empty() {
        return Some(error_response(
            StatusCode::BAD_REQUEST,
            "Target must be a non-empty URL",
        ));
    }
    None
}

fn source_for(req: &HttpRequest, config: &Config, keyword: &str) -> String {
    let conn_info = req.connection_info();
    let host = resolve_host(config.host.as_deref(), conn_info.host());
    source_url(host, keyword)
}

pub struct AdminService {}

impl AdminService {
    /// List every live link.
    pub async fn get_all_links(backend: web::Data<Arc<dyn Backend>>) -> impl Responder {
        trace!("Admin API: request to list all links");

        match backend.load_all().await {
            Ok(links) => {
                info!("Admin API: returning {} links", links.len());
                let links: Vec<LinkResponse> = links.into_iter().map(LinkResponse::from).collect();
                success_response(links)
            }
            Err(e) => {
                error!("Admin API: failed to list links: {}", e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error listing links")
            }
        }
    }

    /// Create a link, overwriting any previous mapping for the keyword.
    pub async fn post_link(
        req: HttpRequest,
        link: web::Json<PostNewLink>,
        backend: web::Data<Arc<dyn Backend>>,
        config: web::Data<Config>,
    ) -> impl Responder {
        info!(
            "Admin API: create link request - keyword: {}, target: {}",
            link.keyword, link.target
        );

        if let Some(rejection) = validate_mutation(&link.keyword, &link.target) {
            return rejection;
        }

        let new_link = Link::new(link.keyword.clone(), link.target.clone());
        match backend.set(new_link.clone()).await {
            Ok(()) => {
                info!("Admin API: link created - {}", new_link.keyword);
                let source = source_for(&req, &config, &new_link.keyword);
                HttpResponse::Created()
                    .append_header(("Content-Type", "application/json; charset=utf-8"))
                    .json(ApiResponse {
                        code: 0,
                        data: CreatedLinkResponse {
                            keyword: new_link.keyword,
                            target: new_link.target,
                            source,
                        },
                    })
            }
            Err(e) => {
                error!("Admin API: failed to create link - {}: {}", link.keyword, e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error creating link")
            }
        }
    }

    /// Fetch a single link.
    pub async fn get_link(
        keyword: web::Path<String>,
        backend: web::Data<Arc<dyn Backend>>,
    ) -> impl Responder {
        trace!("Admin API: get link request - keyword: {}", keyword);

        match backend.get(&keyword).await {
            Ok(Some(link)) => success_response(LinkResponse::from(link)),
            Ok(None) => {
                info!("Admin API: link not found - {}", keyword);
                error_response(StatusCode::NOT_FOUND, "Link not found")
            }
            Err(e) => {
                error!("Admin API: failed to get link - {}: {}", keyword, e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error getting link")
            }
        }
    }

    /// Create or overwrite the link for a keyword. Upsert semantics: a
    /// missing keyword is created, an existing one is replaced.
    pub async fn update_link(
        req: HttpRequest,
        keyword: web::Path<String>,
        link: web::Json<PutLink>,
        backend: web::Data<Arc<dyn Backend>>,
        config: web::Data<Config>,
    ) -> impl Responder {
        let keyword = keyword.into_inner();
        info!(
            "Admin API: update link request - keyword: {}, target: {}",
            keyword, link.target
        );

        if let Some(rejection) = validate_mutation(&keyword, &link.target) {
            return rejection;
        }

        let updated = Link::new(keyword.clone(), link.target.clone());
        match backend.set(updated.clone()).await {
            Ok(()) => {
                info!("Admin API: link updated - {}", keyword);
                let source = source_for(&req, &config, &keyword);
                success_response(CreatedLinkResponse {
                    keyword: updated.keyword,
                    target: updated.target,
                    source,
                })
            }
            Err(e) => {
                error!("Admin API: failed to update link - {}: {}", keyword, e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error updating link")
            }
        }
    }

    /// Delete a link. Idempotent: deleting an absent keyword succeeds.
    pub async fn delete_link(
        keyword: web::Path<String>,
        backend: web::Data<Arc<dyn Backend>>,
    ) -> impl Responder {
        info!("Admin API: delete link request - keyword: {}", keyword);

        match backend.remove(&keyword).await {
            Ok(()) => {
                info!("Admin API: link deleted - {}", keyword);
                success_response(serde_json::json!({
                    "message": "Link deleted successfully"
                }))
            }
            Err(e) => {
                error!("Admin API: failed to delete link - {}: {}", keyword, e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error deleting link")
            }
        }
    }
}

/// Admin route configuration, mounted when admin mode is enabled.
pub fn admin_routes() -> Scope {
    web::scope("/admin")
        .route("/link", web::get().to(AdminService::get_all_links))
        .route("/link", web::post().to(AdminService::post_link))
        .route("/link/{keyword}", web::get().to(AdminService::get_link))
        .route("/link/{keyword}", web::put().to(AdminService::update_link))
        .route("/link/{keyword}", web::delete().to(AdminService::delete_link))
}

/// Stand-in scope mounted when admin mode is disabled: every method and
/// path under /admin answers 404, so the surface is indistinguishable from
/// one that does not exist.
pub fn admin_disabled_routes() -> Scope {
    web::scope("/admin").default_service(web::route().to(HttpResponse::NotFound))
}
