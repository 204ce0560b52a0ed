//! Pre/post-release segment handling for semantic versioning
//!
//! A segment is the optional qualifier suffix of a version (`dev1`, `alpha2`,
//! `beta1`, `rc3`, `post1`). Deprecated spellings of a kind are rejected with
//! a distinguishing error so that callers learn the canonical name.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppTemplateError, Result};

/// The kind of a version segment, in precedence order.
///
/// The absent segment is not a kind: it is the neutral "release" point and
/// sorts between [`SegmentKind::Rc`] and [`SegmentKind::Post`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Development snapshot
    Dev,
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    Rc,
    /// Post-release fixup
    Post,
}

/// Rank of the absent segment in the kind precedence order.
const RELEASE_POINT_RANK: u8 = 4;

impl SegmentKind {
    /// Validate a kind spelling against the kind table.
    ///
    /// Canonical spellings are accepted. Known synonyms (`a`, `b`, `c`,
    /// `pre`, `preview`, `r`, `rev`) are rejected with the canonical kind
    /// they should have been. Anything else is unknown.
    fn verify(value: &str) -> Result<Self> {
        match value {
            "dev" => Ok(SegmentKind::Dev),
            "alpha" => Ok(SegmentKind::Alpha),
            "beta" => Ok(SegmentKind::Beta),
            "rc" => Ok(SegmentKind::Rc),
            "post" => Ok(SegmentKind::Post),
            "a" => Err(Self::synonym(value, "alpha")),
            "b" => Err(Self::synonym(value, "beta")),
            "c" | "pre" | "preview" => Err(Self::synonym(value, "rc")),
            "r" | "rev" => Err(Self::synonym(value, "post")),
            _ => Err(AppTemplateError::SegmentKindUnknown {
                value: value.to_string(),
            }),
        }
    }

    fn synonym(value: &str, expected: &'static str) -> AppTemplateError {
        AppTemplateError::SegmentKindSynonym {
            value: value.to_string(),
            expected,
        }
    }

    /// The canonical spelling of this kind
    pub fn name(&self) -> &'static str {
        match self {
            SegmentKind::Dev => "dev",
            SegmentKind::Alpha => "alpha",
            SegmentKind::Beta => "beta",
            SegmentKind::Rc => "rc",
            SegmentKind::Post => "post",
        }
    }

    /// Precedence rank, leaving a slot for the absent segment
    fn rank(&self) -> u8 {
        match self {
            SegmentKind::Dev => 0,
            SegmentKind::Alpha => 1,
            SegmentKind::Beta => 2,
            SegmentKind::Rc => 3,
            SegmentKind::Post => 5,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn segment_regex() -> &'static Regex {
    static SEGMENT_RE: OnceLock<Regex> = OnceLock::new();
    // Non-digit kind immediately followed by a digit number, nothing else
    SEGMENT_RE.get_or_init(|| {
        Regex::new(r"^([^0-9]+)([0-9]+)$").expect("segment pattern is a valid regex")
    })
}

/// The optional pre/post-release qualifier of a semantic version.
///
/// Kind and number are both present or both absent, which a single `Option`
/// over the pair guarantees. Instances are immutable after construction.
///
/// # Examples
/// - `Segment::parse(None)` -> the empty segment
/// - `Segment::parse(Some("dev1"))` -> kind Dev, number 1
/// - `Segment::parse(Some("a1"))` -> synonym error citing "alpha"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    part: Option<(SegmentKind, u64)>,
}

impl Segment {
    /// The empty segment, marking a plain release
    pub fn none() -> Self {
        Segment { part: None }
    }

    /// Parse a segment from an optional raw string.
    ///
    /// `None` yields the empty segment. A string must be a kind spelling
    /// immediately followed by a non-negative base-10 number.
    ///
    /// # Errors
    /// - `SegmentValueInvalid` when the text does not split into parts
    /// - `SegmentKindSynonym` for deprecated kind spellings
    /// - `SegmentKindUnknown` for unrecognized kind spellings
    /// - `PositiveIntegerValue` when the number does not fit
    pub fn parse(value: Option<&str>) -> Result<Self> {
        let Some(text) = value else {
            return Ok(Segment::none());
        };

        let captures = segment_regex()
            .captures(text)
            .ok_or_else(|| AppTemplateError::segment_value(text, "Cannot extract parts"))?;

        let kind = SegmentKind::verify(&captures[1])?;
        let number = captures[2].parse::<u64>().map_err(|e| {
            AppTemplateError::positive_integer("segment.number", &captures[2], e.to_string())
        })?;

        Ok(Segment {
            part: Some((kind, number)),
        })
    }

    /// The segment kind, if any
    pub fn kind(&self) -> Option<SegmentKind> {
        self.part.map(|(kind, _)| kind)
    }

    /// The segment number, if any
    pub fn number(&self) -> Option<u64> {
        self.part.map(|(_, number)| number)
    }

    /// True when this is the empty segment
    pub fn is_none(&self) -> bool {
        self.part.is_none()
    }

    /// Tuple used to sort segments: kind rank, then number.
    ///
    /// The empty segment takes the release-point rank between `rc` and
    /// `post`, so `dev < alpha < beta < rc < (none) < post`.
    pub fn sort_key(&self) -> (u8, u64) {
        match self.part {
            Some((kind, number)) => (kind.rank(), number),
            None => (RELEASE_POINT_RANK, 0),
        }
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.part {
            Some((kind, number)) => write!(f, "{}{}", kind, number),
            None => Ok(()),
        }
    }
}
