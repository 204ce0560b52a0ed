//! Semantic version representation with total ordering
//!
//! A version is `major.minor.patch` with an optional trailing segment
//! (`1.2.3`, `1.2.3.dev1`). Pre-release segments sort before the plain
//! release, post-release segments after it.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::segment::Segment;
use crate::error::{AppTemplateError, Result};

/// Shared validation for version number fields.
///
/// Rejects negative values, naming the offending field. The accepted value
/// range is otherwise only limited by the machine integer width.
pub(crate) fn verify_number(value: i64, field: &'static str) -> Result<u64> {
    u64::try_from(value).map_err(|_| AppTemplateError::positive_integer(field, value, "Negative"))
}

/// A semantic version with an optional pre/post-release segment.
///
/// Instances are immutable after construction and totally ordered by the
/// tuple `(major, minor, patch, segment)`:
///
/// `1.0.0.dev1 < 1.0.0.alpha1 < 1.0.0.beta1 < 1.0.0.rc1 < 1.0.0
/// < 1.0.0.post1 < 1.0.1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    segment: Segment,
}

impl SemanticVersion {
    /// Construct a version from explicit fields.
    ///
    /// Each numeric field must be non-negative; the segment string, when
    /// present, must be a valid segment spelling.
    ///
    /// # Errors
    /// - `PositiveIntegerValue` naming `major`, `minor`, or `patch` for a
    ///   negative field
    /// - segment errors propagated unchanged from [`Segment::parse`]
    pub fn new(major: i64, minor: i64, patch: i64, segment: Option<&str>) -> Result<Self> {
        Ok(SemanticVersion {
            major: verify_number(major, "major")?,
            minor: verify_number(minor, "minor")?,
            patch: verify_number(patch, "patch")?,
            segment: Segment::parse(segment)?,
        })
    }

    /// Parse a version from its traditional dotted string.
    ///
    /// Exactly `major.minor.patch` or `major.minor.patch.segment` is
    /// accepted. Missing numeric slots fail as empty integer literals, so
    /// only the trailing segment is optional.
    ///
    /// # Errors
    /// - `TooManyComponents` for more than four dot-separated parts
    /// - `IntLiteral` for an empty or non-numeric numeric slot
    /// - all validation errors of [`SemanticVersion::new`]
    ///
    /// # Example
    /// ```
    /// use apptemplate::SemanticVersion;
    ///
    /// let v = SemanticVersion::from_string("1.2.3").unwrap();
    /// assert_eq!(v.to_string(), "1.2.3");
    /// assert!(SemanticVersion::from_string("1.2").is_err());
    /// ```
    pub fn from_string(value: &str) -> Result<Self> {
        let mut parts: Vec<&str> = value.split('.').collect();
        if parts.len() > 4 {
            return Err(AppTemplateError::TooManyComponents {
                value: value.to_string(),
            });
        }
        // Pad to exactly four slots. A two-part input like "1.2" therefore
        // leaves an empty patch slot, which fails below as an invalid
        // integer literal: patch is mandatory, only the segment is not.
        while parts.len() < 4 {
            parts.push("");
        }

        let major = parts[0].parse::<i64>()?;
        let minor = parts[1].parse::<i64>()?;
        let patch = parts[2].parse::<i64>()?;

        let segment = parts[3].trim();
        let segment = if segment.is_empty() {
            None
        } else {
            Some(segment)
        };

        SemanticVersion::new(major, minor, patch, segment)
    }

    /// The major version number
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version number
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version number
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The version segment, possibly empty
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// Tuple used to sort versions, most significant field first
    pub fn sort_key(&self) -> (u64, u64, u64, (u8, u64)) {
        (self.major, self.minor, self.patch, self.segment.sort_key())
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SemanticVersion {
    type Err = AppTemplateError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::from_string(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.segment.is_none() {
            write!(f, ".{}", self.segment)?;
        }
        Ok(())
    }
}
