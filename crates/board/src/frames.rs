//! Frame string codec.
//!
//! A climb's hold selection is stored as a "frame string": a run of
//! `p<placementId>r<roleId>` tokens, one per hold, with no separator beyond
//! the markers themselves (for example `p1082r15p1117r12p1164r14`). This
//! module decodes that encoding into typed holds, renders holds back out,
//! and builds the `LIKE` match patterns used to filter climbs by hold
//! selection.

use thiserror::Error;

/// A single hold within a frame: a placement on the wall plus the role the
/// hold plays in the climb (start, hand, foot, finish).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hold {
    /// Placement id, unique within a layout.
    pub placement_id: u32,
    /// Role id from the placement-role table.
    pub role_id: u32,
}

impl Hold {
    /// Creates a hold from a placement and role pair.
    pub fn new(placement_id: u32, role_id: u32) -> Self {
        Self {
            placement_id,
            role_id,
        }
    }
}

/// Errors produced when decoding a frame string.
// Error enum variant fields are self-documenting via their #[error(...)] messages
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A hold segment did not contain exactly one role marker.
    #[error("malformed hold segment 'p{segment}': expected exactly one 'r' role marker")]
    MalformedSegment { segment: String },

    /// The placement id could not be parsed as a non-negative integer.
    #[error("invalid placement id '{value}' in frame string")]
    InvalidPlacementId { value: String },

    /// The role id could not be parsed as a non-negative integer.
    #[error("invalid role id '{value}' in frame string")]
    InvalidRoleId { value: String },
}

/// Decodes a frame string into its holds, in encoding order.
///
/// Text before the first `p` marker is ignored, matching the historical
/// decoder. An empty string decodes to an empty selection.
pub fn parse_frames(frames: &str) -> Result<Vec<Hold>, FrameError> {
    let mut holds = Vec::new();

    for segment in frames.split('p').skip(1) {
        let parts: Vec<&str> = segment.split('r').collect();
        let (placement, role) = match parts.as_slice() {
            [placement, role] => (*placement, *role),
            _ => {
                return Err(FrameError::MalformedSegment {
                    segment: segment.to_string(),
                });
            }
        };

        let placement_id =
            placement
                .parse::<u32>()
                .map_err(|_| FrameError::InvalidPlacementId {
                    value: placement.to_string(),
                })?;
        let role_id = role.parse::<u32>().map_err(|_| FrameError::InvalidRoleId {
            value: role.to_string(),
        })?;

        holds.push(Hold {
            placement_id,
            role_id,
        });
    }

    Ok(holds)
}

/// Renders holds back into a frame string, preserving their order.
pub fn render_frames(holds: &[Hold]) -> String {
    holds
        .iter()
        .map(|hold| format!("p{}r{}", hold.placement_id, hold.role_id))
        .collect()
}

/// Renders a hold selection as a SQL `LIKE` pattern.
///
/// Holds are sorted by placement id (stable, so duplicate placements keep
/// their input order), which makes the pattern independent of selection
/// order. With `include_roles` each token carries the full `p<id>r<role>`
/// form; without it the role id is dropped but the `r` marker is kept so a
/// placement id can never match a longer id by prefix (`p12` vs `p123`).
/// The result is wrapped in `%` wildcards to match anywhere inside a stored
/// frame string.
pub fn match_pattern(holds: &[Hold], include_roles: bool) -> String {
    let mut sorted: Vec<Hold> = holds.to_vec();
    sorted.sort_by_key(|hold| hold.placement_id);

    let tokens: Vec<String> = sorted
        .iter()
        .map(|hold| {
            if include_roles {
                format!("p{}r{}", hold.placement_id, hold.role_id)
            } else {
                format!("p{}r", hold.placement_id)
            }
        })
        .collect();

    format!("%{}%", tokens.join("%"))
}
