//! Receipt Points Service Library
//!
//! This library provides the core functionality for the receipt points
//! service: receipt models, the loyalty scoring rules, in-memory receipt
//! storage, and the HTTP handlers and router that expose them.
//!
//! # Modules
//!
//! - `api`: API definitions.
//! - `core`: Core business logic.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Receipt and response models.
//! - `router`: Route table and middleware.
//! - `scoring`: Loyalty points rules.
//! - `store`: In-memory receipt storage.

pub mod api;
pub mod core;

// Re-export primary modules for shared use in tests and the binary
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod router;
pub mod scoring;
pub mod store;
