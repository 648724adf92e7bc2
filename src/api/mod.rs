pub mod backend;
pub mod error;
pub mod models;

pub use backend::{BackendClient, SearchQuery};
pub use error::SearchError;
pub use models::Track;
