//! Crimp board domain core.
//!
//! This crate carries the pure, store-independent half of the Crimp climb
//! search engine: the frame-string codec, hold geometry with left-right
//! mirror resolution, and match-pattern construction for hold-filtered
//! searches. It has no I/O; the `crimp-store` crate layers SQLite-backed
//! reads on top of these types.
//!
//! # Concepts
//!
//! Standardized interactive climbing boards describe a climb as a *frame*:
//! an encoded list of `(placement, role)` pairs naming which holds the climb
//! uses and what each hold is for. The board's layout may be physically
//! mirrored left-to-right, in which case every climb has an implicit mirror
//! image reachable through the hole symmetry map.
//!
//! - [`frames`] - decoding and rendering of frame strings
//! - [`geometry`] - placement/hole geometry and the [`MirrorIndex`]
//! - [`pattern`] - canonical + mirrored match patterns for a hold selection
//! - [`model`] - reference-data rows (layouts, sizes, sets, grades, beta)
//!
//! # Quick Start
//!
//! ```
//! use crimp_board::{frames, HoldPatterns, MirrorIndex, HoldGeometry};
//!
//! // Decode a climb's frame string.
//! let holds = frames::parse_frames("p1082r15p1117r12").unwrap();
//! assert_eq!(holds.len(), 2);
//!
//! // Build match patterns for a hold selection on a mirrored layout where
//! // placements 1082 and 1090 occupy mirrored holes.
//! let index = MirrorIndex::new(&[
//!     HoldGeometry { placement_id: 1082, x: 4, y: 8, hole_id: 51, mirrored_hole_id: Some(52) },
//!     HoldGeometry { placement_id: 1090, x: 140, y: 8, hole_id: 52, mirrored_hole_id: Some(51) },
//! ]);
//! let patterns = HoldPatterns::build("p1082r15", true, Some(&index)).unwrap();
//! assert_eq!(patterns.canonical, "%p1082r15%");
//! assert_eq!(patterns.mirrored.as_deref(), Some("%p1090r15%"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod frames;
pub mod geometry;
pub mod model;
pub mod pattern;

// Re-export commonly used types at crate root
pub use frames::{FrameError, Hold};
pub use geometry::{HoldGeometry, MirrorError, MirrorIndex};
pub use model::{BetaLink, GradeLabel, LayoutSummary, RoleColor, SetSummary, SizeEdges, SizeSummary};
pub use pattern::{HoldPatterns, PatternError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
