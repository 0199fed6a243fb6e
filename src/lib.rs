//! Console client for two external sales-analytics services: a k-means
//! clustering API and an Apriori association-rule API.
//!
//! The client performs no analysis of its own. Each subcommand validates its
//! inputs, issues exactly one HTTP request and renders the JSON response as
//! formatted text (per-cluster tables for clustering results, one card per
//! mined rule).

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod panel;
pub mod render;
pub mod validate;

pub use error::ApiError;
pub use panel::{AprioriPanel, KmeansPanel, Outcome};
