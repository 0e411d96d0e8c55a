mod loader;
mod types;

pub use loader::{ConfigError, API_KEY_ENV};
pub use types::{Config, Defaults, NewsConfig, UiConfig};
