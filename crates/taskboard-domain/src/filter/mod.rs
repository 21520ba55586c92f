//! Card filtering for a board view.
//!
//! `card_filter` holds the composable predicates, `board_filters` the
//! transient filter state a board view owns while it is mounted.

pub mod board_filters;
pub mod card_filter;

pub use board_filters::{filter_tags, BoardFilters};
pub use card_filter::{AssigneeFilter, CardFilter, CompositeFilter, SearchFilter, TagFilter};
