//! Template interpolation for labels, links and attributes
//!
//! Handles the `{{PAGE}}` placeholder in configured strings. Whitespace inside
//! the braces is tolerated, so `{{ PAGE }}` works too.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for matching the page placeholder: {{PAGE}}
static PAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*PAGE\s*\}\}").expect("page placeholder regex"));

/// Check if a string contains the page placeholder
pub fn has_page_placeholder(s: &str) -> bool {
    PAGE_REGEX.is_match(s)
}

/// Replace every page placeholder with `page`
///
/// Strings without a placeholder are returned unchanged.
pub fn render_page(template: &str, page: &str) -> String {
    if !has_page_placeholder(template) {
        return template.to_string();
    }
    PAGE_REGEX
        .replace_all(template, regex::NoExpand(page))
        .into_owned()
}

/// Build the href for a page from the url template
///
/// The placeholder is substituted when present, otherwise the page number
/// is appended. An empty template yields the bare page number.
pub fn build_href(url: &str, page: u64) -> String {
    let page = page.to_string();
    if has_page_placeholder(url) {
        render_page(url, &page)
    } else {
        format!("{url}{page}")
    }
}

/// Build the visible text of a numbered page
///
/// `template` without a placeholder is followed by a space and the page.
pub fn build_page_text(template: &str, page: u64, thousands_separator: &str) -> String {
    let formatted = format_page_number(page, thousands_separator);
    if template.is_empty() {
        formatted
    } else if has_page_placeholder(template) {
        render_page(template, &formatted)
    } else {
        format!("{template} {formatted}")
    }
}

/// Format a page number, inserting `separator` between groups of three digits
pub fn format_page_number(page: u64, separator: &str) -> String {
    let digits = page.to_string();
    if separator.is_empty() || digits.len() <= 3 {
        return digits;
    }

    let mut out = String::with_capacity(digits.len() + separator.len() * (digits.len() / 3));
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
