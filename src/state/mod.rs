pub mod app_state;
pub mod delete_state;
pub mod form_state;

pub use app_state::AppState;
pub use delete_state::PendingDeletion;
pub use form_state::{EditTarget, FormSession};
