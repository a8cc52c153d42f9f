//! Match-pattern construction for hold-filtered searches.
//!
//! A hold selection produces one `LIKE` pattern matching climbs as placed
//! and, on mirrored layouts, a second pattern matching the selection's
//! left-right mirror image. When the two coincide the selection is
//! symmetric and a single query suffices.

use thiserror::Error;

use crate::frames::{self, FrameError, Hold};
use crate::geometry::{MirrorError, MirrorIndex};

/// Errors produced while building hold patterns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The hold selection could not be decoded.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// A selected placement could not be mirrored.
    #[error(transparent)]
    Mirror(#[from] MirrorError),
}

/// The canonical and mirrored `LIKE` patterns for one hold selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldPatterns {
    /// Pattern matching the selection as placed.
    pub canonical: String,
    /// Pattern matching the mirrored selection. `None` on non-mirrored
    /// layouts and for selections that mirror onto themselves.
    pub mirrored: Option<String>,
}

impl HoldPatterns {
    /// Builds the pattern pair for a frame-encoded hold selection.
    ///
    /// Callers pass the layout's mirror index exactly when the layout is
    /// mirrored, and `None` otherwise. Each hold keeps its role across the
    /// mirror; only the placement moves.
    pub fn build(
        selection: &str,
        include_roles: bool,
        mirror: Option<&MirrorIndex>,
    ) -> Result<Self, PatternError> {
        let holds = frames::parse_frames(selection)?;
        let canonical = frames::match_pattern(&holds, include_roles);

        let mirrored = match mirror {
            Some(index) => {
                let mut flipped = Vec::with_capacity(holds.len());
                for hold in &holds {
                    let placement_id = index.mirror_placement(hold.placement_id)?;
                    flipped.push(Hold::new(placement_id, hold.role_id));
                }
                let pattern = frames::match_pattern(&flipped, include_roles);
                (pattern != canonical).then_some(pattern)
            }
            None => None,
        };

        Ok(Self {
            canonical,
            mirrored,
        })
    }
}
