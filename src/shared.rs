pub mod types;
pub mod settings;
pub mod errors;
pub mod error;


// Re-export for convenience
pub use error::{AppError, AppResult};
