//! Domain logic - pure version values independent of the command line

pub mod version;

pub use version::{BumpKind, Version};
