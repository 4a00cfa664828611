//! TOC schema version tags.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// On-disk schema version of a table-of-contents tree.
///
/// `V1` is the legacy layout where a single `url` field carries both
/// book-local paths and external links, disambiguated by an `external`
/// flag. `V2` splits the two into separate `file` and `url` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    V1,
    V2,
}

impl Version {
    /// The version tag as it appears in book metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V1 => "v1",
            Version::V2 => "v2",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(Version::V1),
            "v2" => Ok(Version::V2),
            other => Err(Error::UnsupportedVersion(other.to_string())),
        }
    }
}
