//! Process configuration
//!
//! Every value can come from a command-line flag or its matching
//! environment variable (flag wins). A `.env` file is honored when present;
//! `main` loads it before parsing.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "golinks", version, about = "Keyword to URL redirect service")]
pub struct Config {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "GOLINKS_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: String,

    /// Allow admin-level requests (create / update / delete / list)
    #[arg(long, env = "GOLINKS_ADMIN")]
    pub admin: bool,

    /// Storage backend to use. 'sled' and 'redis' currently supported
    #[arg(long, env = "GOLINKS_BACKEND", default_value = "sled")]
    pub backend: String,

    /// Location of the sled data directory
    #[arg(long, env = "GOLINKS_DATA", default_value = "data")]
    pub data: String,

    /// Connection URL for the redis backend
    #[arg(long, env = "GOLINKS_REDIS_URL", default_value = "redis://127.0.0.1:6379/")]
    pub redis_url: String,

    /// Host to use when generating the source URL of a link. Defaults to
    /// the Host header of the generating request
    #[arg(long, env = "GOLINKS_HOST")]
    pub host: Option<String>,
}
