//! Async client for the template management API.
//!
//! This crate provides a type-safe client for the component template and
//! index template endpoints of an Elasticsearch-compatible cluster
//! (`/_component_template`, `/_index_template`, and the simulate endpoint).
//! Rate-limited requests retry with exponential backoff; error envelopes are
//! parsed into structured errors.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::{TemplateClient, TemplateClientBuilder};
pub use error::{ClientError, Result};
