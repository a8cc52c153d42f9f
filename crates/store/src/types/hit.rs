//! Search result rows.

use serde::{Deserialize, Serialize};

/// One climb returned by a search.
///
/// Mirrored-variant hits carry the climb's stored (canonical) frame string;
/// rendering clients flip it through the layout's mirror when drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimbHit {
    /// Climb uuid.
    pub uuid: String,
    /// Username of the setter.
    pub setter: String,
    /// Climb name.
    pub name: String,
    /// Setter-provided description.
    pub description: String,
    /// Frame-encoded hold list.
    pub frames: String,
    /// Wall angle the statistics were recorded at.
    pub angle: i64,
    /// Number of recorded ascents at that angle.
    pub ascents: i64,
    /// Display name of the rounded difficulty, when the grade table has a
    /// row for it.
    pub difficulty: Option<String>,
    /// Average quality rating.
    pub quality: f64,
}
