pub mod error;
pub mod event;
pub mod tool;
mod util;

pub use error::{Error, Result};
pub use event::*;
pub use tool::*;
