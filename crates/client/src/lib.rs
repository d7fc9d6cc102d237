//! Provider client code for scrapegate.
//!
//! This crate provides the Firecrawl REST client and its implementation of
//! the core `ScrapeProvider` seam.

pub mod firecrawl;

pub use firecrawl::{BatchJobStatus, BatchStatusResponse, FirecrawlClient, FirecrawlConfig, FirecrawlError};
