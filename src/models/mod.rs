//! Domain models shared by the API client, the state holders and the UI.

mod article;
mod error;
mod filter;

pub use article::{Article, ArticleSource};
pub use error::ApiError;
pub use filter::{default_date_range, ArticleFilter, SortBy};
