//! Typed search filters.
//!
//! [`ClimbFilter`] is the immutable, validated form of a climb search. It is
//! built either programmatically with the `with_*` methods or from raw
//! string parameters (query-string pairs) via [`ClimbFilter::from_params`],
//! which is where all coercion errors surface.

use crate::error::FilterError;

/// Sort keys accepted by the search, a closed enumeration.
///
/// Each key maps to one backing column inside the query composer; nothing
/// outside this enum ever reaches the ORDER BY clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Number of recorded ascents.
    Ascents,
    /// Continuous display difficulty.
    Difficulty,
    /// Climb name.
    Name,
    /// Average quality rating.
    Quality,
}

impl SortKey {
    /// Parses a raw sort key.
    pub fn parse(value: &str) -> Result<Self, FilterError> {
        match value {
            "ascents" => Ok(SortKey::Ascents),
            "difficulty" => Ok(SortKey::Difficulty),
            "name" => Ok(SortKey::Name),
            "quality" => Ok(SortKey::Quality),
            other => Err(FilterError::UnknownSortKey {
                key: other.to_string(),
            }),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Parses a raw sort order: exactly `"asc"` is ascending, anything else
    /// descends. This never fails, matching the lenient historical handling.
    pub fn parse(value: &str) -> Self {
        if value == "asc" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }
}

/// A validated, immutable set of climb search criteria.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimbFilter {
    /// Layout to search within.
    pub layout_id: i64,
    /// Panel size scoping the climbs by their bounding edges.
    pub size_id: i64,
    /// Hold sets mounted on the wall, used for mirror resolution.
    pub set_ids: Vec<i64>,
    /// Wall angle, or `None` to match any angle.
    pub angle: Option<i64>,
    /// Minimum number of recorded ascents.
    pub min_ascents: i64,
    /// Lower difficulty bucket bound, inclusive.
    pub min_grade: i64,
    /// Upper difficulty bucket bound, inclusive.
    pub max_grade: i64,
    /// Minimum average quality rating.
    pub min_rating: f64,
    /// Maximum allowed deviation between the rounded display difficulty and
    /// the logged difficulty average, boundary included.
    pub grade_accuracy: f64,
    /// Frame-encoded hold selection, or `None` to skip hold filtering.
    pub holds: Option<String>,
    /// Whether hold roles must match exactly, rather than placements only.
    pub match_roles: bool,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page and per variant.
    pub page_size: u32,
}

impl ClimbFilter {
    /// Creates a filter for a layout and size with permissive defaults:
    /// every listed climb with at least one ascent matches, sorted by
    /// ascent count descending, first page of ten.
    pub fn new(layout_id: i64, size_id: i64) -> Self {
        Self {
            layout_id,
            size_id,
            set_ids: Vec::new(),
            angle: None,
            min_ascents: 1,
            min_grade: 1,
            // 1..=39 spans the whole difficulty scale of these databases,
            // so the grade defaults and accuracy default filter nothing.
            max_grade: 39,
            min_rating: 1.0,
            grade_accuracy: 39.0,
            holds: None,
            match_roles: false,
            sort_by: SortKey::Ascents,
            sort_order: SortOrder::Descending,
            page: 0,
            page_size: 10,
        }
    }

    /// Sets the hold sets mounted on the wall.
    pub fn with_sets(mut self, set_ids: Vec<i64>) -> Self {
        self.set_ids = set_ids;
        self
    }

    /// Restricts matches to one wall angle.
    pub fn with_angle(mut self, angle: i64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Sets the inclusive difficulty bucket range.
    pub fn with_grade_range(mut self, min_grade: i64, max_grade: i64) -> Self {
        self.min_grade = min_grade;
        self.max_grade = max_grade;
        self
    }

    /// Sets the minimum ascent count.
    pub fn with_min_ascents(mut self, min_ascents: i64) -> Self {
        self.min_ascents = min_ascents;
        self
    }

    /// Sets the minimum quality rating.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Sets the grade-accuracy tolerance.
    pub fn with_grade_accuracy(mut self, grade_accuracy: f64) -> Self {
        self.grade_accuracy = grade_accuracy;
        self
    }

    /// Sets the frame-encoded hold selection and role-match strictness.
    pub fn with_holds(mut self, holds: impl Into<String>, match_roles: bool) -> Self {
        self.holds = Some(holds.into());
        self.match_roles = match_roles;
        self
    }

    /// Sets the sort key and direction.
    pub fn with_sort(mut self, sort_by: SortKey, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// Sets the page index and page size.
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Row limit of one result page.
    pub fn limit(&self) -> u32 {
        self.page_size
    }

    /// Row offset of the requested page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }

    /// Builds a filter from raw string parameters, typically query-string
    /// pairs. Keys may repeat; only `set` accumulates.
    ///
    /// Required: `layout`, `size`, `minAscents`, `minGrade`, `maxGrade`,
    /// `minRating`, `gradeAccuracy`, `sortBy`. Optional: `set` (repeatable),
    /// `angle` (absent, empty, or `"any"` means any), `holds` (empty means
    /// none), `roleMatch` (strict iff `"strict"`), `sortOrder` (ascending
    /// iff `"asc"`), `page` and `pageSize` (default 0 and 10).
    pub fn from_params(params: &[(&str, &str)]) -> Result<Self, FilterError> {
        let layout_id = parse_i64("layout", require(params, "layout")?)?;
        let size_id = parse_i64("size", require(params, "size")?)?;
        let min_ascents = parse_i64("minAscents", require(params, "minAscents")?)?;
        let min_grade = parse_i64("minGrade", require(params, "minGrade")?)?;
        let max_grade = parse_i64("maxGrade", require(params, "maxGrade")?)?;
        let min_rating = parse_f64("minRating", require(params, "minRating")?)?;
        let grade_accuracy = parse_f64("gradeAccuracy", require(params, "gradeAccuracy")?)?;
        let sort_by = SortKey::parse(require(params, "sortBy")?)?;

        let mut set_ids = Vec::new();
        for (key, value) in params {
            if *key == "set" {
                set_ids.push(parse_i64("set", value)?);
            }
        }

        let angle = match find(params, "angle") {
            None | Some("") | Some("any") => None,
            Some(value) => Some(parse_i64("angle", value)?),
        };

        let holds = match find(params, "holds") {
            None | Some("") => None,
            Some(value) => Some(value.to_string()),
        };
        let match_roles = find(params, "roleMatch") == Some("strict");

        let sort_order = match find(params, "sortOrder") {
            Some(value) => SortOrder::parse(value),
            None => SortOrder::Descending,
        };

        let page = match find(params, "page") {
            Some(value) => parse_u32("page", value)?,
            None => 0,
        };
        let page_size = match find(params, "pageSize") {
            Some(value) => parse_u32("pageSize", value)?,
            None => 10,
        };

        Ok(Self {
            layout_id,
            size_id,
            set_ids,
            angle,
            min_ascents,
            min_grade,
            max_grade,
            min_rating,
            grade_accuracy,
            holds,
            match_roles,
            sort_by,
            sort_order,
            page,
            page_size,
        })
    }
}

fn find<'a>(params: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

fn require<'a>(params: &[(&'a str, &'a str)], key: &str) -> Result<&'a str, FilterError> {
    find(params, key).ok_or_else(|| FilterError::MissingParameter {
        parameter: key.to_string(),
    })
}

fn parse_i64(key: &str, value: &str) -> Result<i64, FilterError> {
    value.parse().map_err(|_| FilterError::InvalidValue {
        parameter: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_f64(key: &str, value: &str) -> Result<f64, FilterError> {
    value.parse().map_err(|_| FilterError::InvalidValue {
        parameter: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_u32(key: &str, value: &str) -> Result<u32, FilterError> {
    value.parse().map_err(|_| FilterError::InvalidValue {
        parameter: key.to_string(),
        value: value.to_string(),
    })
}
