//! Client for the external movie catalog (TMDB-shaped HTTP API).
//!
//! The catalog is an opaque read-only source of movie metadata: titles,
//! poster paths, and logo art. This crate fetches a movie's descriptive
//! fields by catalog id and turns relative image paths into absolute URLs
//! against the configured image base.

pub mod client;
pub mod config;
pub mod error;

pub use client::{CatalogClient, CatalogMovie};
pub use config::CatalogConfig;
pub use error::CatalogError;
