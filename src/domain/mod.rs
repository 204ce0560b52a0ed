//! Domain logic - the version model, independent of configuration and CLI

pub mod segment;
pub mod version;

pub use segment::{Segment, SegmentKind};
pub use version::SemanticVersion;
