//! Hold geometry and mirror resolution.
//!
//! A board's left-right symmetry is defined on holes: each hole may name the
//! hole occupying its mirrored position. Placements instantiate holes within
//! a layout, so mirroring a selected placement means following
//! placement -> hole -> mirrored hole -> placement within the holds loaded
//! for the layout and its hold sets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One placement joined to its backing hole, as loaded for a layout and a
/// selection of hold sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldGeometry {
    /// Placement id.
    pub placement_id: u32,
    /// Hole x coordinate on the board grid.
    pub x: i64,
    /// Hole y coordinate on the board grid.
    pub y: i64,
    /// Backing hole id.
    pub hole_id: u32,
    /// Hole id of the left-right mirror partner, when the layout defines one.
    pub mirrored_hole_id: Option<u32>,
}

/// Errors produced when resolving mirrored placements.
///
/// All of these indicate inconsistent reference data for a layout that is
/// flagged as mirrored, so they are surfaced rather than skipped.
// Error enum variant fields are self-documenting via their #[error(...)] messages
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MirrorError {
    /// The placement is not part of the loaded hold geometry.
    #[error("placement {placement_id} is not present in the loaded holds")]
    UnknownPlacement { placement_id: u32 },

    /// The placement's hole has no mirror partner defined.
    #[error("placement {placement_id} has no mirrored hole")]
    NoMirrorPartner { placement_id: u32 },

    /// The mirrored hole exists but no loaded placement instantiates it.
    #[error("no placement instantiates hole {hole_id}, the mirror of placement {placement_id}")]
    PartnerNotPlaced { placement_id: u32, hole_id: u32 },
}

/// Placement-to-placement mirror lookup built from loaded hold geometry.
#[derive(Debug, Clone, Default)]
pub struct MirrorIndex {
    by_placement: HashMap<u32, HoldGeometry>,
    placement_by_hole: HashMap<u32, u32>,
}

impl MirrorIndex {
    /// Builds an index over the given holds.
    ///
    /// The slice should carry every hold of the layout's selected sets; a
    /// partner lookup can only succeed within what was loaded.
    pub fn new(holds: &[HoldGeometry]) -> Self {
        let mut by_placement = HashMap::with_capacity(holds.len());
        let mut placement_by_hole = HashMap::with_capacity(holds.len());

        for hold in holds {
            by_placement.insert(hold.placement_id, *hold);
            placement_by_hole.insert(hold.hole_id, hold.placement_id);
        }

        Self {
            by_placement,
            placement_by_hole,
        }
    }

    /// Resolves the placement occupying the mirrored position of
    /// `placement_id`.
    pub fn mirror_placement(&self, placement_id: u32) -> Result<u32, MirrorError> {
        let hold = self
            .by_placement
            .get(&placement_id)
            .ok_or(MirrorError::UnknownPlacement { placement_id })?;

        let partner_hole = hold
            .mirrored_hole_id
            .ok_or(MirrorError::NoMirrorPartner { placement_id })?;

        self.placement_by_hole
            .get(&partner_hole)
            .copied()
            .ok_or(MirrorError::PartnerNotPlaced {
                placement_id,
                hole_id: partner_hole,
            })
    }

    /// Number of holds in the index.
    pub fn len(&self) -> usize {
        self.by_placement.len()
    }

    /// Returns true if the index holds no geometry.
    pub fn is_empty(&self) -> bool {
        self.by_placement.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hold(placement_id: u32, hole_id: u32, mirrored_hole_id: Option<u32>) -> HoldGeometry {
        HoldGeometry {
            placement_id,
            x: 0,
            y: 0,
            hole_id,
            mirrored_hole_id,
        }
    }

    /// Two columns of holds mirroring each other, plus one centre hold that
    /// mirrors itself.
    fn symmetric_holds() -> Vec<HoldGeometry> {
        vec![
            hold(100, 1, Some(2)),
            hold(101, 2, Some(1)),
            hold(102, 3, Some(3)),
        ]
    }

    #[test]
    fn test_mirror_placement() {
        let index = MirrorIndex::new(&symmetric_holds());
        assert_eq!(index.mirror_placement(100).unwrap(), 101);
        assert_eq!(index.mirror_placement(101).unwrap(), 100);
    }

    #[test]
    fn test_mirror_is_an_involution() {
        let index = MirrorIndex::new(&symmetric_holds());
        for placement_id in [100, 101, 102] {
            let mirrored = index.mirror_placement(placement_id).unwrap();
            assert_eq!(index.mirror_placement(mirrored).unwrap(), placement_id);
        }
    }

    #[test]
    fn test_centre_hold_mirrors_to_itself() {
        let index = MirrorIndex::new(&symmetric_holds());
        assert_eq!(index.mirror_placement(102).unwrap(), 102);
    }

    #[test]
    fn test_unknown_placement() {
        let index = MirrorIndex::new(&symmetric_holds());
        assert_eq!(
            index.mirror_placement(999).unwrap_err(),
            MirrorError::UnknownPlacement { placement_id: 999 }
        );
    }

    #[test]
    fn test_hole_without_partner() {
        let index = MirrorIndex::new(&[hold(100, 1, None)]);
        assert_eq!(
            index.mirror_placement(100).unwrap_err(),
            MirrorError::NoMirrorPartner { placement_id: 100 }
        );
    }

    #[test]
    fn test_partner_hole_not_placed() {
        // Hole 2 is named as the mirror of hole 1 but was never loaded.
        let index = MirrorIndex::new(&[hold(100, 1, Some(2))]);
        assert_eq!(
            index.mirror_placement(100).unwrap_err(),
            MirrorError::PartnerNotPlaced {
                placement_id: 100,
                hole_id: 2
            }
        );
    }

    #[test]
    fn test_empty_index() {
        let index = MirrorIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
