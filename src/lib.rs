pub mod bump;
pub mod domain;
pub mod error;
pub mod ui;

pub use error::{BumpVersionError, Result};
