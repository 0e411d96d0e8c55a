//! Application use cases sitting between the news client and the screens.

mod articles;
mod language;
mod locale;
mod sources;

pub use articles::LoadArticles;
pub use language::NewsLanguage;
pub use locale::LocaleStore;
pub use sources::{ObserveSources, SourcesResult};
