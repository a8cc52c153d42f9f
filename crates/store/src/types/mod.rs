//! Core types for filters and search results.

pub mod filter;
pub mod hit;

pub use filter::{ClimbFilter, SortKey, SortOrder};
pub use hit::ClimbHit;
