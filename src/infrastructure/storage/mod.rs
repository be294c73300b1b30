pub mod cache;

pub use cache::SuggestCache;
