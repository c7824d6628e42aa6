//! Pagination types
//!
//! Defines the page descriptors produced by the windowing engine and the
//! normalized bounds it works on.

use serde::{Deserialize, Serialize};

/// One link or placeholder in the rendered sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Target page, 0 for dots and for a disabled previous link
    pub page: u64,
    /// Link target, already escaped when attribute escaping is on
    pub href: String,
    /// Visible text, already escaped when HTML escaping is on
    pub text: String,
    /// Accessible label, omitted from markup when empty
    pub aria_label: String,
    /// Raw attributes of the item tag
    pub item_attrs: String,
    /// Raw attributes of the link or dot tag
    pub link_attrs: String,
    pub is_current: bool,
    pub is_dots: bool,
    /// Previous/next item whose target is outside the page range
    pub is_disabled: bool,
}

impl Item {
    /// Create a dots placeholder
    pub fn dots(text: impl Into<String>, item_attrs: impl Into<String>, dot_attrs: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            item_attrs: item_attrs.into(),
            link_attrs: dot_attrs.into(),
            is_dots: true,
            ..Default::default()
        }
    }

    /// Check if this item links somewhere
    pub fn is_navigable(&self) -> bool {
        !self.is_current && !self.is_dots && !self.is_disabled
    }
}

/// Output of the windowing engine
///
/// `previous` and `next` are always present and serialize as `null` when
/// the corresponding link is not produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult {
    pub previous: Option<Item>,
    pub links: Vec<Item>,
    pub next: Option<Item>,
}

impl PaginationResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing at all was produced
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.links.is_empty() && self.next.is_none()
    }

    /// The current page item, if it is inside the window
    pub fn current(&self) -> Option<&Item> {
        self.links.iter().find(|item| item.is_current)
    }

    /// All items in render order: previous, links, next
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.previous
            .iter()
            .chain(self.links.iter())
            .chain(self.next.iter())
    }
}

/// Normalized pagination parameters
///
/// Raw inputs are clamped rather than rejected: the current page is at least
/// 1, the item count at least 0 and the page size at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Current page, may exceed `max_pages`
    pub current: u64,
    pub total_items: u64,
    pub per_page: u64,
    pub max_pages: u64,
}

impl PageBounds {
    /// Clamp raw parameters
    pub fn new(current_page: i64, total_items: i64, per_page: i64) -> Self {
        let current = clamp_to(current_page, 1);
        let total_items = clamp_to(total_items, 0);
        let per_page = clamp_to(per_page, 1);

        Self {
            current,
            total_items,
            per_page,
            max_pages: total_items.div_ceil(per_page),
        }
    }

    /// Check if the limit window contains `page`
    pub fn in_limit(&self, page: u64, limit: u64) -> bool {
        page <= limit || page > self.max_pages.saturating_sub(limit)
    }

    /// Check if the adjacent window contains `page`
    pub fn in_adjacent(&self, page: u64, adjacent: u64) -> bool {
        self.current.saturating_sub(adjacent) <= page
            && page <= self.current.saturating_add(adjacent)
    }
}

/// Clamp a signed value to `min` and convert it
fn clamp_to(value: i64, min: u64) -> u64 {
    u64::try_from(value).map_or(min, |v| v.max(min))
}
