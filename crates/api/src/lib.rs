pub mod error;
pub mod models;
pub mod source;

// Re-export commonly used types
pub use error::{HierarchyError, HierarchyResult};
pub use models::*;
pub use source::FactSource;
