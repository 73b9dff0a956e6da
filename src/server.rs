//! Server mode
//!
//! Builds the actix application around the injected backend and serves it.
//! The backend is closed exactly once on every exit path, including a
//! failed bind.

use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::error;

use crate::api::services::{admin_disabled_routes, admin_routes, redirect_routes};
use crate::config::Config;
use crate::storage::Backend;

/// Bind the listener and serve until shutdown, then release the backend.
pub async fn run(config: Config, backend: Arc<dyn Backend>) -> std::io::Result<()> {
    let bind_address = config.addr.clone();

    let app_config = config.clone();
    let app_backend = backend.clone();
    let server = HttpServer::new(move || {
        let admin_scope = if app_config.admin {
            admin_routes()
        } else {
            admin_disabled_routes()
        };

        App::new()
            .app_data(web::Data::new(app_backend.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .service(admin_scope)
            .service(redirect_routes())
    })
    .bind(bind_address);

    let run_result = match server {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    // 释放存储后端
    if let Err(e) = backend.close().await {
        error!("Failed to close storage backend: {}", e);
    }

    run_result
}
