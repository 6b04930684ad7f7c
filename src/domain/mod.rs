pub mod article;
pub mod state;

pub use article::{Article, FeedResponse, Source};
pub use state::FeedState;
