//! Reader-side helpers that need no calendar or sensor input.
//!
//! This crate provides:
//! - `PageWindow`, incremental loading of a paginated text
//! - Linear verse search with diacritic-insensitive Arabic matching
//! - A tasbeeh counter with rounds
//!
//! Text is supplied by the caller.

pub mod error;
pub mod paging;
pub mod search;
pub mod tasbeeh;

pub use error::ContentError;
pub use paging::{MUSHAF_PAGES, PageWindow};
pub use search::{SearchHit, Verse, normalize_for_search, parse_verses, search};
pub use tasbeeh::{DEFAULT_TASBEEH_TARGET, Tasbeeh, TasbeehEvent};
