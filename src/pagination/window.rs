//! Page window selection
//!
//! Turns (current page, total items, items per page) into the ordered list
//! of items to show: an optional previous link, the numbered window with
//! collapsed gaps, and an optional next link.

use super::types::{Item, PageBounds, PaginationResult};
use crate::config::PaginationConfig;
use crate::error::{EscapeResultExt, RenderField, Result};
use crate::escape::{escape_attr, escape_html, EscapeError};
use crate::template::{build_href, build_page_text, render_page};
use tracing::debug;

/// Href of items that have no navigable target
pub const DISABLED_HREF: &str = "#";

/// Number of pages needed for `total_items`
pub fn count_pages(total_items: i64, per_page: i64) -> u64 {
    PageBounds::new(1, total_items, per_page).max_pages
}

/// Page containing the 1-based `item_index`
pub fn locate_item_in_page(per_page: i64, item_index: i64) -> u64 {
    count_pages(item_index, per_page)
}

/// Compute the items to show
///
/// Never fails on numeric input, which is clamped. Fails only when a text
/// or attribute cannot be escaped for the configured charset.
pub fn paginate(
    current_page: i64,
    total_items: i64,
    per_page: i64,
    config: &PaginationConfig,
) -> Result<PaginationResult> {
    let bounds = PageBounds::new(current_page, total_items, per_page);
    if bounds.total_items == 0 {
        debug!("No items to paginate");
        return Ok(PaginationResult::new());
    }

    let builder = ItemBuilder { config, bounds };
    let result = PaginationResult {
        previous: builder.previous()?,
        links: builder.links()?,
        next: builder.next()?,
    };

    debug!(
        "Paginated page {} of {}: {} links",
        bounds.current,
        bounds.max_pages,
        result.links.len()
    );
    Ok(result)
}

/// Builds items for one computation
struct ItemBuilder<'a> {
    config: &'a PaginationConfig,
    bounds: PageBounds,
}

impl ItemBuilder<'_> {
    // ========================================================================
    // Previous / Next
    // ========================================================================

    fn previous(&self) -> Result<Option<Item>> {
        let config = self.config;
        if !config.use_previous && !config.always_use_previous {
            return Ok(None);
        }
        if !config.always_use_previous && self.bounds.current < 2 {
            return Ok(None);
        }

        let page = (self.bounds.current - 1).min(self.bounds.max_pages);
        let disabled = page == 0;
        let (item_attrs, link_attrs) = if disabled {
            (
                &config.item_previous_attrs_disabled,
                &config.link_previous_attrs_disabled,
            )
        } else {
            (&config.item_previous_attrs, &config.link_attrs)
        };

        self.edge_item(
            page,
            disabled,
            EdgeTemplates {
                text: &config.text_previous,
                aria_label: &config.aria_label_previous,
                item_attrs,
                link_attrs,
            },
            RenderField::PreviousText,
            RenderField::PreviousAttr,
        )
        .map(Some)
    }

    fn next(&self) -> Result<Option<Item>> {
        let config = self.config;
        if !config.use_next && !config.always_use_next {
            return Ok(None);
        }
        if !config.always_use_next && self.bounds.current >= self.bounds.max_pages {
            return Ok(None);
        }

        let page = self.bounds.current.saturating_add(1);
        let disabled = page > self.bounds.max_pages;
        let (item_attrs, link_attrs) = if disabled {
            (
                &config.item_next_attrs_disabled,
                &config.link_next_attrs_disabled,
            )
        } else {
            (&config.item_next_attrs, &config.link_attrs)
        };

        self.edge_item(
            page,
            disabled,
            EdgeTemplates {
                text: &config.text_next,
                aria_label: &config.aria_label_next,
                item_attrs,
                link_attrs,
            },
            RenderField::NextText,
            RenderField::NextAttr,
        )
        .map(Some)
    }

    fn edge_item(
        &self,
        page: u64,
        disabled: bool,
        templates: EdgeTemplates<'_>,
        text_field: RenderField,
        attr_field: RenderField,
    ) -> Result<Item> {
        let page_str = page.to_string();
        let href = if disabled {
            DISABLED_HREF.to_string()
        } else {
            build_href(&self.config.url, page)
        };

        Ok(Item {
            page,
            href: self.attr(&href).for_field(attr_field)?,
            text: self.text(templates.text).for_field(text_field)?,
            aria_label: self
                .attr(&render_page(templates.aria_label, &page_str))
                .for_field(attr_field)?,
            item_attrs: render_page(templates.item_attrs, &page_str),
            link_attrs: render_page(templates.link_attrs, &page_str),
            is_disabled: disabled,
            ..Default::default()
        })
    }

    // ========================================================================
    // Numbered window
    // ========================================================================

    fn links(&self) -> Result<Vec<Item>> {
        let config = self.config;
        let bounds = self.bounds;
        let mut links = Vec::new();
        let mut can_add_dot = true;
        let mut page = 1;

        while page <= bounds.max_pages {
            if page == bounds.current {
                links.push(self.page_item(page, true)?);
                can_add_dot = true;
            } else if self.is_visible(page) {
                links.push(self.page_item(page, false)?);
                can_add_dot = true;
            } else {
                if config.use_dots && can_add_dot {
                    links.push(self.dots_item()?);
                    can_add_dot = false;
                }
                page = self.next_visible(page);
                continue;
            }
            page += 1;
        }

        Ok(links)
    }

    fn is_visible(&self, page: u64) -> bool {
        self.config.show_all_links
            || self.bounds.in_limit(page, self.config.count_pages_pair_limit)
            || self.bounds.in_adjacent(page, self.config.count_pages_pair_adjacent)
    }

    /// First page after the hidden `page` that can produce an item
    fn next_visible(&self, page: u64) -> u64 {
        let bounds = self.bounds;
        let adjacent_start = bounds
            .current
            .saturating_sub(self.config.count_pages_pair_adjacent);
        let limit_start = bounds
            .max_pages
            .saturating_sub(self.config.count_pages_pair_limit)
            + 1;

        [adjacent_start, limit_start]
            .into_iter()
            .filter(|&candidate| candidate > page)
            .min()
            .unwrap_or(bounds.max_pages + 1)
    }

    fn page_item(&self, page: u64, current: bool) -> Result<Item> {
        let config = self.config;
        let page_str = page.to_string();
        let (aria_label, item_attrs, link_attrs) = if current {
            (
                &config.aria_label_current_link,
                &config.item_attrs_current,
                &config.link_attrs_current,
            )
        } else {
            (&config.aria_label_link, &config.item_attrs, &config.link_attrs)
        };
        let href = if current {
            DISABLED_HREF.to_string()
        } else {
            build_href(&config.url, page)
        };
        let text = build_page_text(&config.text_page, page, &config.thousands_separator);

        Ok(Item {
            page,
            href: self.attr(&href).for_field(RenderField::ItemAttr)?,
            text: self.text(&text).for_field(RenderField::ItemText)?,
            aria_label: self
                .attr(&render_page(aria_label, &page_str))
                .for_field(RenderField::ItemAttr)?,
            item_attrs: render_page(item_attrs, &page_str),
            link_attrs: render_page(link_attrs, &page_str),
            is_current: current,
            ..Default::default()
        })
    }

    fn dots_item(&self) -> Result<Item> {
        let config = self.config;
        Ok(Item::dots(
            self.text(&config.text_dots).for_field(RenderField::ItemText)?,
            config.item_dots_attrs.as_str(),
            config.dot_attrs.as_str(),
        ))
    }

    // ========================================================================
    // Escaping
    // ========================================================================

    fn attr(&self, value: &str) -> std::result::Result<String, EscapeError> {
        if self.config.esc_attr {
            escape_attr(value, self.config.charset)
        } else {
            Ok(value.to_string())
        }
    }

    fn text(&self, value: &str) -> std::result::Result<String, EscapeError> {
        if self.config.esc_html {
            escape_html(value, self.config.charset)
        } else {
            Ok(value.to_string())
        }
    }
}

/// Configured strings of a previous or next item
struct EdgeTemplates<'a> {
    text: &'a str,
    aria_label: &'a str,
    item_attrs: &'a str,
    link_attrs: &'a str,
}
