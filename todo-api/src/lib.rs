//! # Todo API Server Library
//!
//! This library provides the HTTP layer of the Todo API: account
//! registration, login and per-user to-do CRUD behind bearer tokens.
//!
//! ## Modules
//!
//! - `app`: Application state, router builder and authentication layer
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Request extractors that reject with the error envelope
//! - `openapi`: Generated OpenAPI document
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod routes;
