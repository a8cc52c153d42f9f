//! Test fixtures for the climb store.
//!
//! Seeds a small two-layout board and provides a builder for climbs with
//! per-angle statistics.
//!
//! The seeded board ("Decoy Board") has a mirrored main layout and a flat
//! one. Holes mirror left to right around x = 72: 11 <-> 12, 14 <-> 15,
//! 16 <-> 17, hole 13 sits on the axis and mirrors to itself, and hole 18
//! has no mirror partner. Placements 101-105 are Bolt Ons and 106-108 are
//! Screw Ons on the main layout; 201-203 are Bolt Ons on the flat layout.

use rusqlite::params;

use crimp_store::SqliteStore;

/// Mirrored main layout.
pub const MAIN_LAYOUT: i64 = 1;
/// Non-mirrored layout sharing the same holes.
pub const FLAT_LAYOUT: i64 = 2;
/// Full 12 x 12 panel.
pub const FULL_SIZE: i64 = 10;
/// Smaller home-wall panel.
pub const SMALL_SIZE: i64 = 11;
/// Primary hold set.
pub const BOLT_ONS: i64 = 1;
/// Secondary hold set.
pub const SCREW_ONS: i64 = 2;

/// Seeds the standard test board: products, layouts, holes, placements,
/// sizes, sets, roles, angles, and grade labels. No climbs.
pub fn seed_board(store: &SqliteStore) {
    let conn = store.get_connection().expect("Failed to get connection");
    conn.execute_batch(
        "
        INSERT INTO products (id, name) VALUES (1, 'Decoy Board');

        INSERT INTO layouts (id, product_id, name, is_mirrored, is_listed, password) VALUES
            (1, 1, 'Decoy Original', 1, 1, NULL),
            (2, 1, 'Decoy Flat', 0, 1, NULL),
            (3, 1, 'Decoy Beta', 0, 0, NULL),
            (4, 1, 'Decoy Comp', 0, 1, 'secret');

        INSERT INTO holes (id, x, y, mirrored_hole_id) VALUES
            (11, 20, 20, 12),
            (12, 124, 20, 11),
            (13, 72, 60, 13),
            (14, 40, 100, 15),
            (15, 104, 100, 14),
            (16, 20, 140, 17),
            (17, 124, 140, 16),
            (18, 60, 8, NULL);

        INSERT INTO sets (id, name) VALUES (1, 'Bolt Ons'), (2, 'Screw Ons');

        INSERT INTO placements (id, layout_id, hole_id, set_id) VALUES
            (101, 1, 11, 1),
            (102, 1, 12, 1),
            (103, 1, 13, 1),
            (104, 1, 14, 1),
            (105, 1, 15, 1),
            (106, 1, 16, 2),
            (107, 1, 17, 2),
            (108, 1, 18, 2),
            (201, 2, 11, 1),
            (202, 2, 12, 1),
            (203, 2, 13, 1);

        INSERT INTO placement_roles (id, product_id, screen_color) VALUES
            (12, 1, '00DD00'),
            (13, 1, '00FFFF'),
            (14, 1, 'FF00FF'),
            (15, 1, 'FFA500');

        INSERT INTO products_angles (product_id, angle) VALUES (1, 40), (1, 20), (1, 70);

        INSERT INTO product_sizes
            (id, product_id, name, description, edge_left, edge_right, edge_bottom, edge_top)
        VALUES
            (10, 1, '12 x 12', 'Full panel', -5, 145, -5, 155),
            (11, 1, '8 x 10', 'Home wall panel', 15, 129, -5, 125);

        INSERT INTO product_sizes_layouts_sets
            (product_size_id, layout_id, set_id, image_filename)
        VALUES
            (10, 1, 1, 'original-12x12-bolt.png'),
            (10, 1, 2, 'original-12x12-screw.png'),
            (11, 1, 1, NULL),
            (10, 2, 1, 'flat-12x12-bolt.png');

        INSERT INTO difficulty_grades (difficulty, boulder_name, is_listed) VALUES
            (10, 'V3', 1),
            (12, 'V4', 1),
            (14, 'V5', 1),
            (15, 'V5+', 1),
            (16, 'V6', 1),
            (18, 'V7', 1),
            (20, 'V8', 1),
            (25, 'V12', 1),
            (33, 'V16', 0);
        ",
    )
    .expect("Failed to seed board");
}

/// One per-angle statistics row for a climb fixture.
#[derive(Debug, Clone, Copy)]
pub struct StatsFixture {
    /// Wall angle.
    pub angle: i64,
    /// Community display difficulty.
    pub display_difficulty: f64,
    /// Average of logged difficulty opinions.
    pub difficulty_average: f64,
    /// Ascent count.
    pub ascents: i64,
    /// Average quality rating.
    pub quality: f64,
}

/// A climb fixture with defaults that pass an unrestricted filter on the
/// seeded board at full size.
#[derive(Debug, Clone)]
pub struct ClimbFixture {
    /// Climb uuid.
    pub uuid: String,
    /// Layout the climb is set on.
    pub layout_id: i64,
    /// Setter username.
    pub setter: String,
    /// Climb name.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Frame-encoded hold list.
    pub frames: String,
    /// Number of frames in the climb.
    pub frames_count: i64,
    /// Draft flag.
    pub is_draft: bool,
    /// Listed flag.
    pub is_listed: bool,
    /// Climb bounding edges (left, right, bottom, top).
    pub edges: (i64, i64, i64, i64),
    /// Per-angle statistics rows.
    pub stats: Vec<StatsFixture>,
}

impl ClimbFixture {
    /// Creates a climb fixture on the main layout with one stats row at
    /// 40 degrees: difficulty 15, 10 ascents, quality 2.5.
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
        frames: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            layout_id: MAIN_LAYOUT,
            setter: "decoy_setter".to_string(),
            name: name.into(),
            description: String::new(),
            frames: frames.into(),
            frames_count: 1,
            is_draft: false,
            is_listed: true,
            edges: (0, 144, 0, 150),
            stats: vec![StatsFixture {
                angle: 40,
                display_difficulty: 15.0,
                difficulty_average: 15.0,
                ascents: 10,
                quality: 2.5,
            }],
        }
    }

    /// Sets the layout.
    pub fn with_layout(mut self, layout_id: i64) -> Self {
        self.layout_id = layout_id;
        self
    }

    /// Sets the setter username.
    pub fn with_setter(mut self, setter: impl Into<String>) -> Self {
        self.setter = setter.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the frame count.
    pub fn with_frames_count(mut self, frames_count: i64) -> Self {
        self.frames_count = frames_count;
        self
    }

    /// Sets the draft flag.
    pub fn with_draft(mut self, is_draft: bool) -> Self {
        self.is_draft = is_draft;
        self
    }

    /// Sets the listed flag.
    pub fn with_listed(mut self, is_listed: bool) -> Self {
        self.is_listed = is_listed;
        self
    }

    /// Sets the bounding edges.
    pub fn with_edges(mut self, left: i64, right: i64, bottom: i64, top: i64) -> Self {
        self.edges = (left, right, bottom, top);
        self
    }

    /// Replaces the stats with one row whose display difficulty equals its
    /// average.
    pub fn with_stats(mut self, angle: i64, difficulty: f64, ascents: i64, quality: f64) -> Self {
        self.stats = vec![StatsFixture {
            angle,
            display_difficulty: difficulty,
            difficulty_average: difficulty,
            ascents,
            quality,
        }];
        self
    }

    /// Adds a stats row at another angle.
    pub fn with_extra_stats(
        mut self,
        angle: i64,
        difficulty: f64,
        ascents: i64,
        quality: f64,
    ) -> Self {
        self.stats.push(StatsFixture {
            angle,
            display_difficulty: difficulty,
            difficulty_average: difficulty,
            ascents,
            quality,
        });
        self
    }

    /// Replaces the stats with one row where the display difficulty and the
    /// logged average disagree.
    pub fn with_graded_stats(
        mut self,
        angle: i64,
        display_difficulty: f64,
        difficulty_average: f64,
        ascents: i64,
        quality: f64,
    ) -> Self {
        self.stats = vec![StatsFixture {
            angle,
            display_difficulty,
            difficulty_average,
            ascents,
            quality,
        }];
        self
    }

    /// Inserts the climb and its stats rows.
    pub fn insert(&self, store: &SqliteStore) {
        let conn = store.get_connection().expect("Failed to get connection");
        conn.execute(
            "INSERT INTO climbs \
             (uuid, layout_id, setter_username, name, description, frames, frames_count, \
              is_draft, is_listed, edge_left, edge_right, edge_bottom, edge_top) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
            params![
                self.uuid,
                self.layout_id,
                self.setter,
                self.name,
                self.description,
                self.frames,
                self.frames_count,
                self.is_draft,
                self.is_listed,
                self.edges.0,
                self.edges.1,
                self.edges.2,
                self.edges.3,
            ],
        )
        .expect("Failed to insert climb");

        for stats in &self.stats {
            conn.execute(
                "INSERT INTO climb_stats \
                 (climb_uuid, angle, display_difficulty, difficulty_average, \
                  ascensionist_count, quality_average) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    self.uuid,
                    stats.angle,
                    stats.display_difficulty,
                    stats.difficulty_average,
                    stats.ascents,
                    stats.quality,
                ],
            )
            .expect("Failed to insert climb stats");
        }
    }
}

/// Inserts a beta link for an existing climb.
pub fn insert_beta_link(
    store: &SqliteStore,
    climb_uuid: &str,
    link: &str,
    angle: Option<i64>,
    foreign_username: Option<&str>,
    is_listed: bool,
) {
    let conn = store.get_connection().expect("Failed to get connection");
    conn.execute(
        "INSERT INTO beta_links (climb_uuid, link, foreign_username, angle, is_listed) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![climb_uuid, link, foreign_username, angle, is_listed],
    )
    .expect("Failed to insert beta link");
}
