//! Golinks - a keyword to URL redirect service
//!
//! This library provides the core functionality for the golinks service:
//! pluggable storage backends, the HTTP redirect and admin surfaces, and
//! source-URL generation.
//!
//! # Architecture
//! - `storage`: the `Backend` contract and its sled / redis implementations
//! - `api`: HTTP services (redirect, admin CRUD)
//! - `server`: listener setup and backend lifecycle
//! - `config`: process configuration (flags + environment)
//! - `errors`: crate-wide error type
//! - `utils`: keyword validation and source-URL generation

pub mod api;
pub mod config;
pub mod errors;
pub mod server;
pub mod storage;
pub mod utils;
