//! Mirror-aware climb search execution.
//!
//! A search runs the filter's predicate up to twice: once with the canonical
//! hold pattern and, on mirrored layouts where the selection flips to a
//! different pattern, once more with the mirrored one. Counts sum the
//! variants and pages concatenate them, so mirrored climbs surface without
//! the caller ever handling mirroring itself.

use rusqlite::Connection;

use crimp_board::{HoldPatterns, MirrorIndex};

use crate::error::StoreResult;
use crate::sqlite::SqliteStore;
use crate::sqlite::query::{ClimbQueryBuilder, SqlFragment};
use crate::sqlite::reference::{holds_on, is_mirrored_on};
use crate::types::{ClimbFilter, ClimbHit};

impl SqliteStore {
    /// Counts the climbs matching a filter.
    ///
    /// With holds selected on a mirrored layout this is the sum of the
    /// canonical and mirrored match counts. A climb whose frames happen to
    /// match both patterns contributes to both.
    pub fn climb_count(&self, filter: &ClimbFilter) -> StoreResult<u64> {
        let conn = self.get_connection()?;
        let patterns = build_patterns(&conn, filter)?;
        let builder = ClimbQueryBuilder::new(filter);

        let canonical = patterns.as_ref().map(|p| p.canonical.as_str());
        let mut total = run_count(&conn, &builder.count(canonical))?;

        if let Some(mirrored) = patterns.as_ref().and_then(|p| p.mirrored.as_deref()) {
            total += run_count(&conn, &builder.count(Some(mirrored)))?;
        }

        tracing::debug!(layout_id = filter.layout_id, total, "counted climbs");
        Ok(total)
    }

    /// Runs a search and returns one page of results.
    ///
    /// The sort and page window apply per variant: with holds selected on a
    /// mirrored layout, a page carries up to `page_size` canonical matches
    /// followed by up to `page_size` mirrored matches, each ordered
    /// independently.
    pub fn climb_search(&self, filter: &ClimbFilter) -> StoreResult<Vec<ClimbHit>> {
        let conn = self.get_connection()?;
        let patterns = build_patterns(&conn, filter)?;
        let builder = ClimbQueryBuilder::new(filter);

        let canonical = patterns.as_ref().map(|p| p.canonical.as_str());
        let mut hits = run_page(&conn, &builder.page(canonical))?;

        if let Some(mirrored) = patterns.as_ref().and_then(|p| p.mirrored.as_deref()) {
            hits.extend(run_page(&conn, &builder.page(Some(mirrored)))?);
        }

        tracing::debug!(
            layout_id = filter.layout_id,
            page = filter.page,
            hits = hits.len(),
            "searched climbs"
        );
        Ok(hits)
    }
}

/// Resolves a filter's hold selection into LIKE patterns.
///
/// Returns `None` when the filter selects no holds. The mirror index is
/// built only when the layout is mirrored, and the mirrored pattern is kept
/// only when it differs from the canonical one.
fn build_patterns(conn: &Connection, filter: &ClimbFilter) -> StoreResult<Option<HoldPatterns>> {
    let Some(holds) = filter.holds.as_deref() else {
        return Ok(None);
    };

    let mirror = if is_mirrored_on(conn, filter.layout_id)? {
        let geometry = holds_on(conn, filter.layout_id, &filter.set_ids)?;
        Some(MirrorIndex::new(&geometry))
    } else {
        None
    };

    let patterns = HoldPatterns::build(holds, filter.match_roles, mirror.as_ref())?;
    Ok(Some(patterns))
}

fn run_count(conn: &Connection, fragment: &SqlFragment) -> StoreResult<u64> {
    let count = conn.query_row(
        &fragment.sql,
        rusqlite::params_from_iter(fragment.params.iter()),
        |row| row.get::<_, u64>(0),
    )?;
    Ok(count)
}

fn run_page(conn: &Connection, fragment: &SqlFragment) -> StoreResult<Vec<ClimbHit>> {
    let mut stmt = conn.prepare(&fragment.sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(fragment.params.iter()), |row| {
        Ok(ClimbHit {
            uuid: row.get(0)?,
            setter: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            frames: row.get(4)?,
            angle: row.get(5)?,
            ascents: row.get(6)?,
            difficulty: row.get(7)?,
            quality: row.get(8)?,
        })
    })?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}
