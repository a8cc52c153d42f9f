//! SQLite-backed climb store.
//!
//! This crate executes searches over synced climbing-board databases. It
//! layers the pure hold and mirror logic from [`crimp_board`] onto a pooled
//! SQLite connection, adding filter validation, safe query composition, and
//! the reference reads a frontend needs to populate its controls.
//!
//! # Architecture
//!
//! - [`types`]: validated [`ClimbFilter`] inputs and [`ClimbHit`] results
//! - [`sqlite`]: the [`SqliteStore`] handle, query builder, schema bootstrap,
//!   reference reads, and search execution
//! - [`error`]: the [`StoreError`] taxonomy shared by every operation
//!
//! Stores are cheap handles over a connection pool; open one per board
//! database and share it freely between threads.
//!
//! # Quick Start
//!
//! ```
//! use crimp_store::{ClimbFilter, SqliteStore};
//!
//! # fn main() -> Result<(), crimp_store::StoreError> {
//! let store = SqliteStore::in_memory()?;
//! store.init_schema()?;
//!
//! // An empty catalog matches nothing.
//! let filter = ClimbFilter::new(1, 10).with_min_ascents(5);
//! assert_eq!(store.climb_count(&filter)?, 0);
//! assert!(store.climb_search(&filter)?.is_empty());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod sqlite;
pub mod types;

pub use error::{BackendError, FilterError, ReferenceError, StoreError, StoreResult};
pub use sqlite::{SqliteStore, SqliteStoreConfig};
pub use types::{ClimbFilter, ClimbHit, SortKey, SortOrder};

// Board-description rows returned by the reference reads.
pub use crimp_board::{
    BetaLink, GradeLabel, HoldGeometry, LayoutSummary, RoleColor, SetSummary, SizeEdges,
    SizeSummary,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
