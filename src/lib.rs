//! Terminal news reader for the NewsAPI aggregation service.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod news;
pub mod ui;
pub mod usecase;
