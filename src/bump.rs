use crate::domain::{BumpKind, Version};
use crate::error::Result;

/// Compute the next version string for the given bump kind.
///
/// Parses the input, increments the requested component, and formats the
/// result as "major.minor.patch". This is the pure operation behind the
/// command-line entry point, which prints the returned string.
pub fn bump(version: &str, kind: BumpKind) -> Result<String> {
    let next = Version::parse(version)?.bump(kind);
    Ok(next.to_string())
}
