pub mod kind;
pub mod message;

pub use kind::*;
pub use message::*;
