pub mod entity;
pub mod fact;
pub mod hierarchy;

pub use entity::*;
pub use fact::*;
pub use hierarchy::*;
