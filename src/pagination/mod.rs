//! Pagination module
//!
//! # Overview
//!
//! The windowing engine decides which page links to show. Given the current
//! page, the item count and the page size it produces a [`PaginationResult`]:
//! an optional previous link, the numbered links with runs of hidden pages
//! collapsed into a single dots item, and an optional next link.
//!
//! Two windows control visibility:
//! - the limit window, `count_pages_pair_limit` pages at each end
//! - the adjacent window, `count_pages_pair_adjacent` pages around the current one

mod types;
mod window;

pub use types::{Item, PageBounds, PaginationResult};
pub use window::{count_pages, locate_item_in_page, paginate, DISABLED_HREF};

#[cfg(test)]
mod tests;
