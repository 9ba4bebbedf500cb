use crate::error::{BumpVersionError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from an input string (e.g., "1.2.3" or "1.0.0-rc1").
    ///
    /// Surrounding whitespace is ignored. Everything from the first hyphen
    /// onward (a pre-release or build suffix) is discarded without being
    /// validated. Missing components are zero-padded on the right, so "1"
    /// parses as 1.0.0 and "1.2" as 1.2.0. Every dot-separated component
    /// must be a non-negative integer; components beyond the third are
    /// validated and then dropped.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let prefix = trimmed.split_once('-').map_or(trimmed, |(p, _)| p);

        let mut parts = Vec::new();
        for component in prefix.split('.') {
            let value = component.parse::<u32>().map_err(|_| {
                BumpVersionError::parse(format!("Invalid version component: '{}'", component))
            })?;
            parts.push(value);
        }
        while parts.len() < 3 {
            parts.push(0);
        }

        Ok(Version::new(parts[0], parts[1], parts[2]))
    }

    /// Bump version according to bump kind.
    ///
    /// Only the requested component changes. Lower-order components are
    /// left untouched: a major bump of 1.2.3 yields 2.2.3, not 2.0.0.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Version {
                major: self.major + 1,
                minor: self.minor,
                patch: self.patch,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: self.patch,
            },
            BumpKind::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl FromStr for BumpKind {
    type Err = BumpVersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(BumpVersionError::invalid_kind(other.to_string())),
        }
    }
}
