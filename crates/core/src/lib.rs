//! Core types and shared functionality for scrapegate.
//!
//! This crate provides:
//! - The adapter that normalizes provider calls into envelopes
//! - The provider seam implemented by concrete scraping clients
//! - Unified error types
//! - Configuration structures

pub mod adapter;
pub mod config;
pub mod envelope;
pub mod error;
pub mod params;
pub mod provider;
pub mod schema;

pub use adapter::{Adapter, DEFAULT_MAX_RESULTS};
pub use config::{AppConfig, ConfigError};
pub use envelope::{Echo, Envelope, Outcome};
pub use error::Error;
pub use params::{Format, JsonOptions, ScrapeParams, SearchParams};
pub use provider::ScrapeProvider;
pub use schema::{FieldKind, FieldSpec, StructuredSchema};
