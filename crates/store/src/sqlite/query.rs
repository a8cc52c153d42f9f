//! Safe SQL composition for climb searches.
//!
//! Every caller-derived value travels as a bound parameter, and sort keys
//! map to backing columns through a closed match, so no external text ever
//! reaches the query string. The builder produces the shared base predicate
//! once; the count and page variants wrap it.

use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;

use crate::types::{ClimbFilter, SortKey, SortOrder};

/// A fragment of SQL with bound parameters.
#[derive(Debug, Clone)]
pub struct SqlFragment {
    /// The SQL text.
    pub sql: String,
    /// Bound parameter values, in placeholder order.
    pub params: Vec<SqlParam>,
}

/// A bound SQL parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// Integer parameter.
    Integer(i64),
    /// Float parameter.
    Float(f64),
    /// Text parameter.
    Text(String),
}

impl SqlParam {
    /// Creates an integer parameter.
    pub fn integer(value: i64) -> Self {
        SqlParam::Integer(value)
    }

    /// Creates a float parameter.
    pub fn float(value: f64) -> Self {
        SqlParam::Float(value)
    }

    /// Creates a text parameter.
    pub fn text(value: impl Into<String>) -> Self {
        SqlParam::Text(value.into())
    }
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::Integer(value) => value.to_sql(),
            SqlParam::Float(value) => value.to_sql(),
            SqlParam::Text(value) => value.to_sql(),
        }
    }
}

impl SqlFragment {
    /// Creates a new SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Creates a fragment with parameters.
    pub fn with_params(sql: impl Into<String>, params: Vec<SqlParam>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Adds a parameter and returns its `?N` placeholder.
    pub fn add_param(&mut self, param: SqlParam) -> String {
        self.params.push(param);
        format!("?{}", self.params.len())
    }
}

/// Builds the count and page queries for one climb filter.
///
/// The same builder serves both predicate variants: the caller passes the
/// canonical or mirrored hold pattern (or none) per call, and every other
/// filter term is rendered identically.
pub struct ClimbQueryBuilder<'a> {
    filter: &'a ClimbFilter,
}

impl<'a> ClimbQueryBuilder<'a> {
    /// Creates a builder over a validated filter.
    pub fn new(filter: &'a ClimbFilter) -> Self {
        Self { filter }
    }

    /// Builds the shared base query: result columns plus the full filter
    /// predicate, with an optional hold-pattern term.
    pub fn base(&self, pattern: Option<&str>) -> SqlFragment {
        let mut query = SqlFragment::new("");

        let size = query.add_param(SqlParam::integer(self.filter.size_id));
        let layout = query.add_param(SqlParam::integer(self.filter.layout_id));
        let min_ascents = query.add_param(SqlParam::integer(self.filter.min_ascents));
        let min_grade = query.add_param(SqlParam::integer(self.filter.min_grade));
        let max_grade = query.add_param(SqlParam::integer(self.filter.max_grade));
        let min_rating = query.add_param(SqlParam::float(self.filter.min_rating));
        let grade_accuracy = query.add_param(SqlParam::float(self.filter.grade_accuracy));

        query.sql = format!(
            "SELECT \
                climbs.uuid, \
                climbs.setter_username, \
                climbs.name, \
                climbs.description, \
                climbs.frames, \
                climb_stats.angle, \
                climb_stats.ascensionist_count, \
                (SELECT boulder_name FROM difficulty_grades \
                 WHERE difficulty = ROUND(climb_stats.display_difficulty)) AS difficulty, \
                climb_stats.quality_average \
             FROM climbs \
             LEFT JOIN climb_stats ON climb_stats.climb_uuid = climbs.uuid \
             INNER JOIN product_sizes ON product_sizes.id = {size} \
             WHERE climbs.frames_count = 1 \
             AND climbs.is_draft = 0 \
             AND climbs.is_listed = 1 \
             AND climbs.layout_id = {layout} \
             AND climbs.edge_left > product_sizes.edge_left \
             AND climbs.edge_right < product_sizes.edge_right \
             AND climbs.edge_bottom > product_sizes.edge_bottom \
             AND climbs.edge_top < product_sizes.edge_top \
             AND climb_stats.ascensionist_count >= {min_ascents} \
             AND ROUND(climb_stats.display_difficulty) BETWEEN {min_grade} AND {max_grade} \
             AND climb_stats.quality_average >= {min_rating} \
             AND ABS(ROUND(climb_stats.display_difficulty) - climb_stats.difficulty_average) <= {grade_accuracy}"
        );

        if let Some(angle) = self.filter.angle {
            let placeholder = query.add_param(SqlParam::integer(angle));
            query.sql.push_str(&format!(" AND climb_stats.angle = {placeholder}"));
        }

        if let Some(pattern) = pattern {
            let placeholder = query.add_param(SqlParam::text(pattern));
            query.sql.push_str(&format!(" AND climbs.frames LIKE {placeholder}"));
        }

        query
    }

    /// Builds the count variant.
    pub fn count(&self, pattern: Option<&str>) -> SqlFragment {
        let base = self.base(pattern);
        SqlFragment::with_params(format!("SELECT COUNT(*) FROM ({})", base.sql), base.params)
    }

    /// Builds the sorted, paginated variant.
    ///
    /// The limit and offset come from the filter's typed page fields and are
    /// rendered as integers; the sort column comes from the closed
    /// [`SortKey`] mapping.
    pub fn page(&self, pattern: Option<&str>) -> SqlFragment {
        let base = self.base(pattern);
        SqlFragment::with_params(
            format!(
                "{} ORDER BY {} {} LIMIT {} OFFSET {}",
                base.sql,
                self.sort_column(),
                self.sort_direction(),
                self.filter.limit(),
                self.filter.offset()
            ),
            base.params,
        )
    }

    /// Maps the filter's sort key to its backing column.
    fn sort_column(&self) -> &'static str {
        match self.filter.sort_by {
            SortKey::Ascents => "climb_stats.ascensionist_count",
            SortKey::Difficulty => "climb_stats.display_difficulty",
            SortKey::Name => "climbs.name",
            SortKey::Quality => "climb_stats.quality_average",
        }
    }

    fn sort_direction(&self) -> &'static str {
        match self.filter.sort_order {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}
