//! # Todo Shared Library
//!
//! This crate contains the storage layer and credential handling used by the
//! Todo API server.
//!
//! ## Module Organization
//!
//! - `auth`: Password hashing, bearer tokens and request authentication
//! - `db`: SQLite connection pool and schema bootstrap
//! - `models`: Database models and their queries

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
