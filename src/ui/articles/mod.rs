mod intent;
mod list;
mod reducer;
mod state;

pub use intent::ArticlesIntent;
pub use list::render_articles;
pub use reducer::ArticlesReducer;
pub use state::ArticlesState;
