use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Canonical form of a blank or missing version.
pub const ZERO_VERSION: &str = "0.0";

/// A two part `major.minor` API version as reported by the server, e.g. `6.4`.
///
/// Ordering and equality only consider `major` and `minor`, where a missing minor (`"7"`) orders
/// as `0`. Any segments after the second (`"9.9.1.69595"`) are kept for display but otherwise
/// ignored.
#[derive(Debug, Clone)]
pub struct Version {
    major: u8,
    minor: Option<u8>,
    raw: String,
}

impl Version {
    /// Parse a dotted version string. Blank input is treated as [ZERO_VERSION].
    pub fn parse(s: &str) -> Result<Self> {
        let raw = match s.trim() {
            "" => ZERO_VERSION,
            trimmed => trimmed,
        };
        let mut segments = raw.split('.');
        let major = parse_segment(raw, segments.next().unwrap_or_default())?;
        let minor = segments
            .next()
            .map(|segment| parse_segment(raw, segment))
            .transpose()?;
        Ok(Self {
            major,
            minor,
            raw: raw.to_string(),
        })
    }

    pub fn zero() -> Self {
        Self {
            major: 0,
            minor: Some(0),
            raw: ZERO_VERSION.to_string(),
        }
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    /// `None` if the version string only had a major segment.
    pub fn minor(&self) -> Option<u8> {
        self.minor
    }

    /// A version only counts as defined when _both_ major and minor are non-zero, so `1.0` is
    /// not defined. Deprecation checks rely on this exact rule.
    pub fn is_defined(&self) -> bool {
        self.major != 0 && self.minor.unwrap_or(0) != 0
    }

    pub fn greater(&self, other: &Version) -> bool {
        self > other
    }

    pub fn less_or_equal(&self, other: &Version) -> bool {
        self <= other
    }

    fn key(&self) -> (u8, u8) {
        (self.major, self.minor.unwrap_or(0))
    }
}

fn parse_segment(raw: &str, segment: &str) -> Result<u8> {
    segment.parse::<u8>().map_err(|source| Error::MalformedVersion {
        input: raw.to_string(),
        source,
    })
}

impl Default for Version {
    fn default() -> Self {
        Self::zero()
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Version::parse(raw.as_deref().unwrap_or_default()).map_err(D::Error::custom)
    }
}
