//! Terminal screens: the article list, article detail, and filter sheet.

pub mod app;
pub mod articles;
pub mod events;
pub mod filter;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
