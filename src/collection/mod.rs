mod client;
mod gallery;
mod image_cache;
mod query_builder;
mod source;

pub use client::Client;
pub use gallery::{Gallery, DEFAULT_ITEMS_PER_PAGE, DEFAULT_NUMBER_OF_PAGES, DEFAULT_RANDOM_COUNT};
pub use query_builder::SearchQuery;
pub use source::ObjectSource;
