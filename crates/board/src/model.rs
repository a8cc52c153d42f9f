//! Reference-data row types.
//!
//! Plain rows returned by the store's reference reads: layouts, sizes, hold
//! sets, grades, role colors, and per-climb beta links. These are immutable
//! catalog data shipped inside a board database.

use serde::{Deserialize, Serialize};

/// A listed layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSummary {
    /// Layout id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// A display name for an integer difficulty bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeLabel {
    /// Difficulty bucket, the rounding target for continuous difficulties.
    pub difficulty: i64,
    /// Boulder-scale display name.
    pub boulder_name: String,
}

/// A panel size of a layout's product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSummary {
    /// Product-size id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Description, typically the physical dimensions.
    pub description: String,
}

/// Bounding edges of a panel size on the board grid.
///
/// A climb fits a size when its own edges lie strictly inside these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEdges {
    /// Left edge.
    pub left: i64,
    /// Right edge.
    pub right: i64,
    /// Bottom edge.
    pub bottom: i64,
    /// Top edge.
    pub top: i64,
}

/// A hold set available for a layout and size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSummary {
    /// Set id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

/// Screen color of a placement role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleColor {
    /// Role id.
    pub role_id: u32,
    /// Hex color in `#rrggbb` form.
    pub color: String,
}

/// A community-contributed beta link for a climb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetaLink {
    /// Wall angle the beta was recorded at, when known.
    pub angle: Option<i64>,
    /// Username on the foreign platform hosting the video.
    pub foreign_username: Option<String>,
    /// Link to the video.
    pub link: String,
}
