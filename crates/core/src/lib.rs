pub mod bundle;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod logging;
pub mod page;

pub use error::{DocscopeError, Result};
