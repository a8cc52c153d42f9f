//! Board reference reads.
//!
//! Catalog lookups that describe the board itself rather than its climbs:
//! layouts, difficulty grades, hold placements, product sizes, sets, role
//! colors, and per-climb extras such as beta links. Frontends use these to
//! populate filter controls and to render boards, and the search path reuses
//! the hold and mirror lookups when resolving hold selections.

use std::sync::Arc;

use rusqlite::{Connection, OptionalExtension, params};

use crimp_board::{
    BetaLink, GradeLabel, HoldGeometry, LayoutSummary, RoleColor, SetSummary, SizeEdges,
    SizeSummary,
};

use crate::error::{ReferenceError, StoreResult};
use crate::sqlite::SqliteStore;

/// Reads a layout's mirrored flag on an already-acquired connection.
pub(crate) fn is_mirrored_on(conn: &Connection, layout_id: i64) -> StoreResult<bool> {
    let flag: Option<Option<i64>> = conn
        .query_row(
            "SELECT is_mirrored FROM layouts WHERE id = ?1",
            params![layout_id],
            |row| row.get(0),
        )
        .optional()?;
    let flag = flag.ok_or(ReferenceError::LayoutNotFound { layout_id })?;
    Ok(flag == Some(1))
}

/// Reads hold geometry for a layout on an already-acquired connection,
/// accumulating the placements of each requested set in order.
pub(crate) fn holds_on(
    conn: &Connection,
    layout_id: i64,
    set_ids: &[i64],
) -> StoreResult<Vec<HoldGeometry>> {
    let mut stmt = conn.prepare(
        "SELECT placements.id, holes.x, holes.y, placements.hole_id, holes.mirrored_hole_id \
         FROM placements \
         INNER JOIN holes ON placements.hole_id = holes.id \
         WHERE placements.layout_id = ?1 AND placements.set_id = ?2",
    )?;

    let mut holds = Vec::new();
    for set_id in set_ids {
        let rows = stmt.query_map(params![layout_id, set_id], |row| {
            Ok(HoldGeometry {
                placement_id: row.get(0)?,
                x: row.get(1)?,
                y: row.get(2)?,
                hole_id: row.get(3)?,
                mirrored_hole_id: row.get(4)?,
            })
        })?;
        for hold in rows {
            holds.push(hold?);
        }
    }
    Ok(holds)
}

impl SqliteStore {
    /// Lists the layouts available for browsing.
    ///
    /// Password-protected and unlisted layouts are excluded.
    pub fn layouts(&self) -> StoreResult<Vec<LayoutSummary>> {
        let conn = self.get_connection()?;
        let mut stmt =
            conn.prepare("SELECT id, name FROM layouts WHERE is_listed = 1 AND password IS NULL")?;
        let rows = stmt.query_map([], |row| {
            Ok(LayoutSummary {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Returns a layout's display name.
    pub fn layout_name(&self, layout_id: i64) -> StoreResult<String> {
        let conn = self.get_connection()?;
        let name: Option<String> = conn
            .query_row(
                "SELECT name FROM layouts WHERE id = ?1",
                params![layout_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name.ok_or(ReferenceError::LayoutNotFound { layout_id })?)
    }

    /// Returns whether a layout supports mirrored climbs.
    pub fn is_mirrored(&self, layout_id: i64) -> StoreResult<bool> {
        let conn = self.get_connection()?;
        is_mirrored_on(&conn, layout_id)
    }

    /// Lists the angles a layout's product can be set to, ascending.
    pub fn angles(&self, layout_id: i64) -> StoreResult<Vec<i64>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(
            "SELECT angle FROM products_angles \
             JOIN layouts ON layouts.product_id = products_angles.product_id \
             WHERE layouts.id = ?1 \
             ORDER BY angle ASC",
        )?;
        let rows = stmt.query_map(params![layout_id], |row| row.get(0))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Returns the listed difficulty grade labels, ascending by difficulty.
    ///
    /// The grade table is immutable reference data, so the first read is
    /// cached for the lifetime of the store and later calls share it.
    pub fn grades(&self) -> StoreResult<Arc<Vec<GradeLabel>>> {
        if let Some(grades) = self.grades_cache().read().as_ref() {
            return Ok(Arc::clone(grades));
        }

        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(
            "SELECT difficulty, boulder_name FROM difficulty_grades \
             WHERE is_listed = 1 \
             ORDER BY difficulty ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(GradeLabel {
                difficulty: row.get(0)?,
                boulder_name: row.get(1)?,
            })
        })?;
        let grades = Arc::new(rows.collect::<rusqlite::Result<Vec<_>>>()?);

        let mut cache = self.grades_cache().write();
        if cache.is_none() {
            *cache = Some(Arc::clone(&grades));
            tracing::debug!(count = grades.len(), "cached difficulty grade labels");
        }
        Ok(grades)
    }

    /// Returns the hold geometry for a layout, accumulated across the given
    /// sets in order.
    pub fn holds(&self, layout_id: i64, set_ids: &[i64]) -> StoreResult<Vec<HoldGeometry>> {
        let conn = self.get_connection()?;
        holds_on(&conn, layout_id, set_ids)
    }

    /// Lists the hold role colors for a layout's product as `#RRGGBB` strings.
    pub fn colors(&self, layout_id: i64) -> StoreResult<Vec<RoleColor>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(
            "SELECT placement_roles.id, '#' || placement_roles.screen_color \
             FROM placement_roles \
             JOIN layouts ON layouts.product_id = placement_roles.product_id \
             WHERE layouts.id = ?1",
        )?;
        let rows = stmt.query_map(params![layout_id], |row| {
            Ok(RoleColor {
                role_id: row.get(0)?,
                color: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Lists the product sizes available for a layout.
    pub fn sizes(&self, layout_id: i64) -> StoreResult<Vec<SizeSummary>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(
            "SELECT product_sizes.id, product_sizes.name, product_sizes.description \
             FROM product_sizes \
             INNER JOIN layouts ON product_sizes.product_id = layouts.product_id \
             WHERE layouts.id = ?1",
        )?;
        let rows = stmt.query_map(params![layout_id], |row| {
            Ok(SizeSummary {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Returns a product size's display name within a layout.
    pub fn size_name(&self, layout_id: i64, size_id: i64) -> StoreResult<String> {
        let conn = self.get_connection()?;
        let name: Option<String> = conn
            .query_row(
                "SELECT product_sizes.name \
                 FROM product_sizes \
                 INNER JOIN layouts ON product_sizes.product_id = layouts.product_id \
                 WHERE layouts.id = ?1 AND product_sizes.id = ?2",
                params![layout_id, size_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name.ok_or(ReferenceError::SizeNotFound { size_id })?)
    }

    /// Returns a product size's edge coordinates.
    pub fn size_edges(&self, size_id: i64) -> StoreResult<SizeEdges> {
        let conn = self.get_connection()?;
        let edges = conn
            .query_row(
                "SELECT edge_left, edge_right, edge_bottom, edge_top \
                 FROM product_sizes WHERE id = ?1",
                params![size_id],
                |row| {
                    Ok(SizeEdges {
                        left: row.get(0)?,
                        right: row.get(1)?,
                        bottom: row.get(2)?,
                        top: row.get(3)?,
                    })
                },
            )
            .optional()?;
        Ok(edges.ok_or(ReferenceError::SizeNotFound { size_id })?)
    }

    /// Lists the hold sets mounted on a layout at a given size.
    pub fn sets(&self, layout_id: i64, size_id: i64) -> StoreResult<Vec<SetSummary>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(
            "SELECT sets.id, sets.name \
             FROM sets \
             INNER JOIN product_sizes_layouts_sets psls ON psls.set_id = sets.id \
             WHERE psls.product_size_id = ?1 AND psls.layout_id = ?2",
        )?;
        let rows = stmt.query_map(params![size_id, layout_id], |row| {
            Ok(SetSummary {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Returns the board image filename for a layout, size, and set, if one
    /// is published.
    pub fn image_filename(
        &self,
        layout_id: i64,
        size_id: i64,
        set_id: i64,
    ) -> StoreResult<Option<String>> {
        let conn = self.get_connection()?;
        let filename: Option<Option<String>> = conn
            .query_row(
                "SELECT image_filename FROM product_sizes_layouts_sets \
                 WHERE layout_id = ?1 AND product_size_id = ?2 AND set_id = ?3",
                params![layout_id, size_id, set_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(filename.flatten())
    }

    /// Returns a climb's display name.
    pub fn climb_name(&self, climb_uuid: &str) -> StoreResult<String> {
        let conn = self.get_connection()?;
        let name: Option<String> = conn
            .query_row(
                "SELECT name FROM climbs WHERE uuid = ?1",
                params![climb_uuid],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name.ok_or_else(|| ReferenceError::ClimbNotFound {
            uuid: climb_uuid.to_string(),
        })?)
    }

    /// Lists the published beta links for a climb, steepest angle first.
    pub fn beta_links(&self, climb_uuid: &str) -> StoreResult<Vec<BetaLink>> {
        let conn = self.get_connection()?;
        let mut stmt = conn.prepare(
            "SELECT angle, foreign_username, link FROM beta_links \
             WHERE climb_uuid = ?1 AND is_listed = 1 \
             ORDER BY angle DESC",
        )?;
        let rows = stmt.query_map(params![climb_uuid], |row| {
            Ok(BetaLink {
                angle: row.get(0)?,
                foreign_username: row.get(1)?,
                link: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
