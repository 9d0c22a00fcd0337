pub mod api_client;
pub mod category_cache;
pub mod storage;

pub use api_client::{ApiClient, ApiError};
pub use category_cache::CategoryCache;
pub use storage::{LocalStorage, StorageBackend};
