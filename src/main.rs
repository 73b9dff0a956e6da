use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use golinks::config::Config;
use golinks::storage::BackendFactory;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    // 检查存储后端
    let backend = match BackendFactory::create(&config).await {
        Ok(backend) => backend,
        Err(e) => {
            error!("Failed to create storage backend: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using storage backend: {}", backend.backend_name());

    if config.admin {
        info!("Admin API available at: /admin");
    } else {
        info!("Admin API is disabled (start with --admin to enable)");
    }

    info!("Starting server at http://{}", config.addr);
    golinks::server::run(config, backend).await
}
