//! Client for the NewsAPI v2 aggregation service.
//!
//! [`NewsApiClient`] issues the HTTP requests; [`dto`] holds the wire payloads
//! and their mapping onto [`crate::models`].

mod client;
pub mod dto;
mod error;

pub use client::{everything_query, NewsApi, NewsApiClient};
pub use error::NewsError;
