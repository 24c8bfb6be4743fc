
pub mod error;
pub use self::error::{Context, Error, Result};

pub mod log;
pub use self::log::*;

pub mod notate;

pub mod serialize;
pub use self::serialize::*;
