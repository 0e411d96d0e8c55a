mod holder;
mod intent;
mod reducer;
mod sheet;
mod state;

pub use holder::{ArticleFilterStateHolder, Clock};
pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use sheet::{render_filter_sheet, FilterField};
pub use state::{build_source_options, ArticleFilterState, FilterState, ALL_SOURCES};
