//! Configuration for pagination generation and rendering
//!
//! [`PaginationConfig`] is a typed record with explicit defaults. Untyped
//! key/value bags (JSON or YAML mappings) are merged into it through
//! [`PaginationConfig::apply`], which coerces every value to the kind its
//! key declares instead of rejecting it.

use crate::escape::Charset;
use crate::types::{JsonObject, JsonValue};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{trace, warn};

/// Valid structural tag names
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z-]+$").expect("tag name regex"));

/// Check if a tag name is accepted for root, item, link or dot tags
pub fn is_valid_tag(tag: &str) -> bool {
    TAG_REGEX.is_match(tag)
}

// ============================================================================
// Pagination Config
// ============================================================================

/// Complete pagination configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    // Calculations
    /// Pages always shown at each end
    pub count_pages_pair_limit: u64,
    /// Pages shown on each side of the current page
    pub count_pages_pair_adjacent: u64,

    // Links
    /// Href template, `{{PAGE}}` is substituted or the page appended
    pub url: String,

    // Texts
    pub text_previous: String,
    pub text_next: String,
    pub text_dots: String,
    /// Numbered link text template
    pub text_page: String,

    // Aria labels
    pub aria_label_link: String,
    pub aria_label_current_link: String,
    pub aria_label_nav: String,
    pub aria_label_previous: String,
    pub aria_label_next: String,

    /// Inserted between groups of three digits in page texts
    pub thousands_separator: String,

    // Generation
    pub use_dots: bool,
    pub use_previous: bool,
    /// Emit previous even on the first page, disabled
    pub always_use_previous: bool,
    pub use_next: bool,
    /// Emit next even on the last page, disabled
    pub always_use_next: bool,
    pub show_all_links: bool,

    // Tags
    root_tag: String,
    item_tag: String,
    link_tag: String,
    dot_tag: String,

    // Raw attributes, inserted verbatim
    pub root_attrs: String,
    pub item_attrs: String,
    pub item_attrs_current: String,
    pub item_previous_attrs: String,
    pub item_previous_attrs_disabled: String,
    pub item_next_attrs: String,
    pub item_next_attrs_disabled: String,
    pub item_dots_attrs: String,
    pub link_attrs: String,
    pub link_attrs_current: String,
    pub link_previous_attrs_disabled: String,
    pub link_next_attrs_disabled: String,
    pub dot_attrs: String,
    pub nav_attrs: String,

    // HTML output
    pub use_pretty_html: bool,
    pub use_nav: bool,
    pub html_tab_sequence: String,
    pub html_initial_indentation: usize,

    // Security
    pub esc_attr: bool,
    pub esc_html: bool,
    pub charset: Charset,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            count_pages_pair_limit: 0,
            count_pages_pair_adjacent: 2,

            url: String::new(),

            text_previous: "Previous page".to_string(),
            text_next: "Next page".to_string(),
            text_dots: "…".to_string(),
            text_page: "{{PAGE}}".to_string(),

            aria_label_link: "Page {{PAGE}}".to_string(),
            aria_label_current_link: "Page {{PAGE}}".to_string(),
            aria_label_nav: "Pagination".to_string(),
            aria_label_previous: "Previous page".to_string(),
            aria_label_next: "Next page".to_string(),

            thousands_separator: String::new(),

            use_dots: false,
            use_previous: false,
            always_use_previous: false,
            use_next: false,
            always_use_next: false,
            show_all_links: false,

            root_tag: "ul".to_string(),
            item_tag: "li".to_string(),
            link_tag: "a".to_string(),
            dot_tag: "span".to_string(),

            root_attrs: String::new(),
            item_attrs: String::new(),
            item_attrs_current: String::new(),
            item_previous_attrs: String::new(),
            item_previous_attrs_disabled: String::new(),
            item_next_attrs: String::new(),
            item_next_attrs_disabled: String::new(),
            item_dots_attrs: String::new(),
            link_attrs: String::new(),
            link_attrs_current: String::new(),
            link_previous_attrs_disabled: String::new(),
            link_next_attrs_disabled: String::new(),
            dot_attrs: String::new(),
            nav_attrs: String::new(),

            use_pretty_html: true,
            use_nav: true,
            html_tab_sequence: "\t".to_string(),
            html_initial_indentation: 0,

            esc_attr: true,
            esc_html: true,
            charset: Charset::Utf8,
        }
    }
}

impl PaginationConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config from a key/value bag applied over the defaults
    pub fn from_values(values: &JsonObject) -> Self {
        let mut config = Self::default();
        config.apply(values);
        config
    }

    /// Root container tag
    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    /// Per-item wrapper tag
    pub fn item_tag(&self) -> &str {
        &self.item_tag
    }

    /// Link tag inside each item
    pub fn link_tag(&self) -> &str {
        &self.link_tag
    }

    /// Tag wrapping the dots text
    pub fn dot_tag(&self) -> &str {
        &self.dot_tag
    }

    /// Set the root tag, returns false and keeps the old tag when invalid
    pub fn set_root_tag(&mut self, tag: &str) -> bool {
        set_tag(&mut self.root_tag, "root_tag", tag)
    }

    /// Set the item tag, returns false and keeps the old tag when invalid
    pub fn set_item_tag(&mut self, tag: &str) -> bool {
        set_tag(&mut self.item_tag, "item_tag", tag)
    }

    /// Set the link tag, returns false and keeps the old tag when invalid
    pub fn set_link_tag(&mut self, tag: &str) -> bool {
        set_tag(&mut self.link_tag, "link_tag", tag)
    }

    /// Set the dot tag, returns false and keeps the old tag when invalid
    pub fn set_dot_tag(&mut self, tag: &str) -> bool {
        set_tag(&mut self.dot_tag, "dot_tag", tag)
    }

    /// Set the url template
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the limit and adjacent window sizes
    #[must_use]
    pub fn with_windows(mut self, limit: u64, adjacent: u64) -> Self {
        self.count_pages_pair_limit = limit;
        self.count_pages_pair_adjacent = adjacent;
        self
    }

    /// Enable or disable the dots placeholder
    #[must_use]
    pub fn with_dots(mut self, enabled: bool) -> Self {
        self.use_dots = enabled;
        self
    }

    /// Enable or disable previous and next links
    #[must_use]
    pub fn with_previous_next(mut self, enabled: bool) -> Self {
        self.use_previous = enabled;
        self.use_next = enabled;
        self
    }

    /// Enable or disable pretty printing
    #[must_use]
    pub fn with_pretty_html(mut self, enabled: bool) -> Self {
        self.use_pretty_html = enabled;
        self
    }

    /// Enable or disable the nav landmark
    #[must_use]
    pub fn with_nav(mut self, enabled: bool) -> Self {
        self.use_nav = enabled;
        self
    }

    /// Set the document charset
    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Merge a key/value bag into this config
    ///
    /// Unknown keys are ignored. Values are coerced to the kind of their key,
    /// negative integers clamp to 0, and invalid tag names or charsets leave
    /// the current value in place.
    pub fn apply(&mut self, values: &JsonObject) {
        for (key, value) in values {
            self.apply_one(key, value);
        }
    }

    fn apply_one(&mut self, key: &str, value: &JsonValue) {
        match key {
            // Strings
            "url" => self.url = coerce_string(value),
            "text_previous" => self.text_previous = coerce_string(value),
            "text_next" => self.text_next = coerce_string(value),
            "text_dots" => self.text_dots = coerce_string(value),
            "text_page" => self.text_page = coerce_string(value),
            "aria_label_link" => self.aria_label_link = coerce_string(value),
            "aria_label_current_link" => self.aria_label_current_link = coerce_string(value),
            "aria_label_nav" => self.aria_label_nav = coerce_string(value),
            "aria_label_previous" => self.aria_label_previous = coerce_string(value),
            "aria_label_next" => self.aria_label_next = coerce_string(value),
            "thousands_separator" => self.thousands_separator = coerce_string(value),
            "root_attrs" => self.root_attrs = coerce_string(value),
            "item_attrs" => self.item_attrs = coerce_string(value),
            "item_attrs_current" => self.item_attrs_current = coerce_string(value),
            "item_previous_attrs" => self.item_previous_attrs = coerce_string(value),
            "item_previous_attrs_disabled" => {
                self.item_previous_attrs_disabled = coerce_string(value);
            }
            "item_next_attrs" => self.item_next_attrs = coerce_string(value),
            "item_next_attrs_disabled" => self.item_next_attrs_disabled = coerce_string(value),
            "item_dots_attrs" => self.item_dots_attrs = coerce_string(value),
            "link_attrs" => self.link_attrs = coerce_string(value),
            "link_attrs_current" => self.link_attrs_current = coerce_string(value),
            "link_previous_attrs_disabled" => {
                self.link_previous_attrs_disabled = coerce_string(value);
            }
            "link_next_attrs_disabled" => self.link_next_attrs_disabled = coerce_string(value),
            "dot_attrs" => self.dot_attrs = coerce_string(value),
            "nav_attrs" => self.nav_attrs = coerce_string(value),
            "html_tab_sequence" => self.html_tab_sequence = coerce_string(value),

            // Tags
            "root_tag" => {
                self.set_root_tag(&coerce_string(value));
            }
            "item_tag" => {
                self.set_item_tag(&coerce_string(value));
            }
            "link_tag" => {
                self.set_link_tag(&coerce_string(value));
            }
            "dot_tag" => {
                self.set_dot_tag(&coerce_string(value));
            }

            "charset" => match coerce_string(value).parse::<Charset>() {
                Ok(charset) => self.charset = charset,
                Err(e) => warn!("Ignoring charset: {e}"),
            },

            // Booleans
            "use_dots" => self.use_dots = coerce_bool(value),
            "use_previous" => self.use_previous = coerce_bool(value),
            "always_use_previous" => self.always_use_previous = coerce_bool(value),
            "use_next" => self.use_next = coerce_bool(value),
            "always_use_next" => self.always_use_next = coerce_bool(value),
            "show_all_links" => self.show_all_links = coerce_bool(value),
            "use_pretty_html" => self.use_pretty_html = coerce_bool(value),
            "use_nav" => self.use_nav = coerce_bool(value),
            "esc_attr" => self.esc_attr = coerce_bool(value),
            "esc_html" => self.esc_html = coerce_bool(value),

            // Non-negative integers
            "count_pages_pair_limit" => {
                if let Some(n) = coerce_count(key, value) {
                    self.count_pages_pair_limit = n;
                }
            }
            "count_pages_pair_adjacent" => {
                if let Some(n) = coerce_count(key, value) {
                    self.count_pages_pair_adjacent = n;
                }
            }
            "html_initial_indentation" => {
                if let Some(n) = coerce_count(key, value) {
                    self.html_initial_indentation = usize::try_from(n).unwrap_or(usize::MAX);
                }
            }

            _ => trace!("Ignoring unknown configuration key '{key}'"),
        }
    }
}

fn set_tag(slot: &mut String, key: &str, tag: &str) -> bool {
    if is_valid_tag(tag) {
        *slot = tag.to_string();
        true
    } else {
        warn!("Ignoring invalid {key} '{tag}', keeping '{slot}'");
        false
    }
}

// ============================================================================
// Coercion
// ============================================================================

/// Convert any value to a string
fn coerce_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Null => String::new(),
        // For complex types, use JSON serialization
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Convert any value to a boolean using truthiness
fn coerce_bool(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !matches!(s.trim(), "" | "0" | "false"),
        JsonValue::Null => false,
        JsonValue::Array(a) => !a.is_empty(),
        JsonValue::Object(o) => !o.is_empty(),
    }
}

/// Convert a value to a non-negative integer, clamping negatives to 0
fn coerce_count(key: &str, value: &JsonValue) -> Option<u64> {
    let n = match value {
        JsonValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f as i64)),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        JsonValue::Bool(b) => Some(i64::from(*b)),
        JsonValue::Null => Some(0),
        _ => None,
    };

    match n {
        Some(n) => Some(n.max(0) as u64),
        None => {
            warn!("Ignoring non-integer value for {key}: {value}");
            None
        }
    }
}
