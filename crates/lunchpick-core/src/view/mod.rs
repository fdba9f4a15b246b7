//! The data-table view pipeline.
//!
//! Three composable pure stages, applied in a fixed order:
//! filter → sort → paginate. Each stage is its own module; nothing in here
//! touches the gateway or mutates session state.

mod filter;
mod page;
mod sort;

pub use filter::filter_records;
pub use page::{PAGE_SIZE, clamp_page, page_count, page_slice};
pub use sort::{SortConfig, SortDirection, SortKey, compare_records, sort_records};
