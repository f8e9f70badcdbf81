mod debug;
mod error_response;
mod fallback;
mod health;
mod summarize;

pub use debug::debug_handler;
pub use error_response::ErrorResponse;
pub use fallback::fallback_handler;
pub use health::health_handler;
pub use summarize::{CACHE_STATUS_HEADER, client_id, summarize_handler};
