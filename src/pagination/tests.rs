//! Tests for pagination module

use super::*;
use crate::config::PaginationConfig;
use crate::error::{Error, RenderField};
use crate::escape::Charset;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Helpers
// ============================================================================

fn link(page: u64) -> Item {
    Item {
        page,
        href: page.to_string(),
        text: page.to_string(),
        aria_label: format!("Page&#x20;{page}"),
        ..Default::default()
    }
}

fn current(page: u64) -> Item {
    Item {
        href: "&#x23;".to_string(),
        is_current: true,
        ..link(page)
    }
}

fn previous(page: u64) -> Item {
    Item {
        page,
        href: page.to_string(),
        text: "Previous page".to_string(),
        aria_label: "Previous&#x20;page".to_string(),
        ..Default::default()
    }
}

fn next(page: u64) -> Item {
    Item {
        page,
        href: page.to_string(),
        text: "Next page".to_string(),
        aria_label: "Next&#x20;page".to_string(),
        ..Default::default()
    }
}

fn dots() -> Item {
    Item::dots("…", "", "")
}

fn config(values: serde_json::Value) -> PaginationConfig {
    PaginationConfig::from_values(values.as_object().unwrap())
}

fn pages(result: &PaginationResult) -> Vec<Option<u64>> {
    result
        .links
        .iter()
        .map(|item| (!item.is_dots).then_some(item.page))
        .collect()
}

// ============================================================================
// Counting Tests
// ============================================================================

#[test_case(1, 1, 1 ; "one item one per page")]
#[test_case(10, 1, 10 ; "ten items one per page")]
#[test_case(10, 5, 2 ; "exact division")]
#[test_case(11, 5, 3 ; "remainder")]
#[test_case(0, 5, 0 ; "no items")]
#[test_case(-9, 1, 0 ; "negative count")]
#[test_case(10, 0, 10 ; "zero per page")]
#[test_case(10, -3, 10 ; "negative per page")]
fn test_count_pages(total: i64, per_page: i64, expected: u64) {
    assert_eq!(count_pages(total, per_page), expected);
}

#[test_case(1, 1, 1 ; "first item")]
#[test_case(10, 1, 1 ; "first of ten")]
#[test_case(10, 5, 1 ; "middle of first page")]
#[test_case(10, 10, 1 ; "last of first page")]
#[test_case(10, 11, 2 ; "first of second page")]
#[test_case(5, 25, 5 ; "last of fifth page")]
#[test_case(5, 26, 6 ; "first of sixth page")]
#[test_case(5, -4, 0 ; "negative index")]
fn test_locate_item_in_page(per_page: i64, item_index: i64, expected: u64) {
    assert_eq!(locate_item_in_page(per_page, item_index), expected);
}

#[test]
fn test_page_bounds_clamping() {
    let bounds = PageBounds::new(-3, -9, 0);
    assert_eq!(bounds.current, 1);
    assert_eq!(bounds.total_items, 0);
    assert_eq!(bounds.per_page, 1);
    assert_eq!(bounds.max_pages, 0);

    let bounds = PageBounds::new(i64::MAX, i64::MAX, 1);
    assert_eq!(bounds.max_pages, i64::MAX as u64);
    assert!(bounds.in_adjacent(i64::MAX as u64, 2));
}

// ============================================================================
// Default Behavior Tests
// ============================================================================

#[test]
fn test_default_two_pages() {
    let result = paginate(1, 2, 1, &PaginationConfig::default()).unwrap();

    assert_eq!(
        result,
        PaginationResult {
            previous: None,
            links: vec![current(1), link(2)],
            next: None,
        }
    );
}

#[test]
fn test_no_items_produces_nothing() {
    let config = config(json!({
        "always_use_previous": true,
        "always_use_next": true,
        "use_dots": true,
        "show_all_links": true
    }));

    for total in [0, -1, -100] {
        let result = paginate(3, total, 10, &config).unwrap();
        assert!(result.is_empty());
    }
}

#[test]
fn test_configuration_merge() {
    let mut config = config(json!({"text_previous": "toto", "use_next": true}));
    config.apply(json!({"text_next": "aze", "use_previous": true}).as_object().unwrap());

    let result = paginate(2, 6, 2, &config).unwrap();
    assert_eq!(
        result,
        PaginationResult {
            previous: Some(Item {
                text: "toto".to_string(),
                ..previous(1)
            }),
            links: vec![link(1), current(2), link(3)],
            next: Some(Item {
                text: "aze".to_string(),
                ..next(3)
            }),
        }
    );
}

// ============================================================================
// Clamping Tests
// ============================================================================

#[test_case(99, 1, 1, Some(previous(1)), vec![], None ; "current past single page")]
#[test_case(-1, 1, 1, None, vec![current(1)], None ; "negative current single page")]
#[test_case(1, 1, -9, None, vec![current(1)], None ; "negative per page single page")]
#[test_case(1, -9, 1, None, vec![], None ; "negative count")]
#[test_case(99, 6, 2, Some(previous(3)), vec![], None ; "current past last page")]
#[test_case(-1, 6, 2, None, vec![current(1), link(2), link(3)], Some(next(2)) ; "negative current")]
#[test_case(2, 6, -9, Some(previous(1)), vec![link(1), current(2), link(3), link(4)], Some(next(3)) ; "negative per page")]
#[test_case(2, -9, 2, None, vec![], None ; "negative count with per page")]
fn test_incorrect_inputs_are_clamped(
    current_page: i64,
    total: i64,
    per_page: i64,
    expected_previous: Option<Item>,
    expected_links: Vec<Item>,
    expected_next: Option<Item>,
) {
    let config = config(json!({"use_previous": true, "use_next": true}));
    let result = paginate(current_page, total, per_page, &config).unwrap();

    assert_eq!(result.previous, expected_previous);
    assert_eq!(result.links, expected_links);
    assert_eq!(result.next, expected_next);
}

// ============================================================================
// Window Tests
// ============================================================================

#[test_case(1, None, Some(2) ; "first page")]
#[test_case(2, Some(1), Some(3) ; "second page")]
#[test_case(50, Some(49), None ; "last page")]
fn test_show_all_links(current_page: u64, previous_page: Option<u64>, next_page: Option<u64>) {
    let config = config(json!({
        "use_previous": true,
        "use_next": true,
        "show_all_links": true
    }));
    let result = paginate(current_page as i64, 50, 1, &config).unwrap();

    let expected: Vec<Item> = (1..=50)
        .map(|page| if page == current_page { current(page) } else { link(page) })
        .collect();
    assert_eq!(result.links, expected);
    assert_eq!(result.previous, previous_page.map(previous));
    assert_eq!(result.next, next_page.map(next));
}

#[test_case(0, 0, vec![20] ; "limit 0 adjacent 0")]
#[test_case(5, 0, [1..=5, 20..=20, 46..=50].into_iter().flatten().collect() ; "limit 5 adjacent 0")]
#[test_case(0, 5, (15..=25).collect() ; "limit 0 adjacent 5")]
#[test_case(5, 5, [1..=5, 15..=25, 46..=50].into_iter().flatten().collect() ; "limit 5 adjacent 5")]
fn test_adjacent_and_limit(limit: u64, adjacent: u64, expected_pages: Vec<u64>) {
    let config = PaginationConfig::new().with_windows(limit, adjacent);
    let result = paginate(20, 50, 1, &config).unwrap();

    let expected: Vec<Item> = expected_pages
        .into_iter()
        .map(|page| if page == 20 { current(page) } else { link(page) })
        .collect();
    assert_eq!(result.links, expected);
}

#[test]
fn test_only_current_when_windows_empty() {
    let config = PaginationConfig::new().with_windows(0, 0).with_dots(false);
    let result = paginate(7, 100, 10, &config).unwrap();
    assert_eq!(result.links, vec![current(7)]);
}

#[test]
fn test_single_dots_across_large_gap() {
    let config = PaginationConfig::new().with_windows(1, 0).with_dots(true);
    let result = paginate(2, 3000, 1, &config).unwrap();

    assert_eq!(pages(&result), vec![Some(1), Some(2), None, Some(3000)]);
    assert_eq!(result.links[2], dots());
}

#[test]
fn test_dots_on_both_sides() {
    let config = PaginationConfig::new().with_windows(1, 1).with_dots(true);
    let result = paginate(10, 20, 1, &config).unwrap();

    assert_eq!(
        pages(&result),
        vec![Some(1), None, Some(9), Some(10), Some(11), None, Some(20)]
    );
}

#[test]
fn test_no_dots_without_gap() {
    let config = PaginationConfig::new().with_windows(1, 2).with_dots(true);
    let result = paginate(4, 7, 1, &config).unwrap();

    assert_eq!(
        pages(&result),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
    );
}

#[test]
fn test_window_invariants_hold_for_all_positions() {
    let config = PaginationConfig::new().with_windows(2, 1).with_dots(true);

    for total in 1..=30 {
        let max_pages = count_pages(total, 1);
        for current_page in 1..=max_pages {
            let result = paginate(current_page as i64, total, 1, &config).unwrap();

            let currents: Vec<_> = result.links.iter().filter(|item| item.is_current).collect();
            assert_eq!(currents.len(), 1, "total {total} current {current_page}");
            assert_eq!(currents[0].page, current_page);

            for pair in result.links.windows(2) {
                assert!(!(pair[0].is_dots && pair[1].is_dots));
            }
            for item in &result.links {
                assert!(!(item.is_dots && item.is_current));
            }

            let numbered: Vec<u64> = result.links.iter().filter(|i| !i.is_dots).map(|i| i.page).collect();
            assert!(numbered.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_huge_page_count_is_fast() {
    let config = PaginationConfig::new().with_windows(2, 2).with_dots(true);
    let result = paginate(1_000_000_000, i64::MAX, 1, &config).unwrap();

    assert_eq!(result.links.len(), 2 + 1 + 5 + 1 + 2);
    assert_eq!(result.current().unwrap().page, 1_000_000_000);
}

// ============================================================================
// Previous / Next Tests
// ============================================================================

#[test]
fn test_forced_previous_and_next_are_disabled() {
    let config = config(json!({
        "always_use_previous": true,
        "always_use_next": true,
        "item_previous_attrs_disabled": "prev-off",
        "link_previous_attrs_disabled": "data-prev",
        "item_next_attrs_disabled": "next-off",
        "link_next_attrs_disabled": "data-next"
    }));
    let result = paginate(1, 1, 1, &config).unwrap();

    let previous = result.previous.unwrap();
    assert!(previous.is_disabled);
    assert_eq!(previous.page, 0);
    assert_eq!(previous.href, "&#x23;");
    assert_eq!(previous.item_attrs, "prev-off");
    assert_eq!(previous.link_attrs, "data-prev");
    assert!(!previous.is_navigable());

    let next = result.next.unwrap();
    assert!(next.is_disabled);
    assert_eq!(next.page, 2);
    assert_eq!(next.href, "&#x23;");
    assert_eq!(next.item_attrs, "next-off");
    assert_eq!(next.link_attrs, "data-next");

    assert_eq!(result.links, vec![current(1)]);
}

#[test]
fn test_forced_previous_and_next_enabled_in_middle() {
    let config = config(json!({
        "always_use_previous": true,
        "always_use_next": true,
        "item_previous_attrs": "prev",
        "item_previous_attrs_disabled": "prev-off",
        "link_attrs": "data-page=\"{{PAGE}}\""
    }));
    let result = paginate(3, 5, 1, &config).unwrap();

    let previous = result.previous.unwrap();
    assert!(!previous.is_disabled);
    assert!(previous.is_navigable());
    assert_eq!(previous.item_attrs, "prev");
    assert_eq!(previous.link_attrs, "data-page=\"2\"");

    let next = result.next.unwrap();
    assert!(!next.is_disabled);
    assert_eq!(next.page, 4);
}

#[test]
fn test_previous_hidden_on_first_page_unless_forced() {
    let config = config(json!({"use_previous": true, "use_next": true}));
    let result = paginate(1, 3, 1, &config).unwrap();
    assert!(result.previous.is_none());
    assert_eq!(result.next, Some(next(2)));

    let result = paginate(3, 3, 1, &config).unwrap();
    assert_eq!(result.previous, Some(previous(2)));
    assert!(result.next.is_none());
}

// ============================================================================
// Item Construction Tests
// ============================================================================

#[test]
fn test_url_template_and_labels() {
    let config = config(json!({
        "url": "/items?page={{PAGE}}",
        "text_page": "p{{PAGE}}",
        "aria_label_link": "Go to {{PAGE}}",
        "aria_label_current_link": "Current {{PAGE}}",
        "item_attrs": "data-item=\"{{PAGE}}\"",
        "item_attrs_current": "class=\"active\"",
        "esc_attr": false
    }));
    let result = paginate(2, 3, 1, &config).unwrap();

    let first = &result.links[0];
    assert_eq!(first.href, "/items?page=1");
    assert_eq!(first.text, "p1");
    assert_eq!(first.aria_label, "Go to 1");
    assert_eq!(first.item_attrs, "data-item=\"1\"");

    let active = result.current().unwrap();
    assert_eq!(active.href, DISABLED_HREF);
    assert_eq!(active.aria_label, "Current 2");
    assert_eq!(active.item_attrs, "class=\"active\"");
}

#[test]
fn test_thousands_separator_and_text_without_placeholder() {
    let config = config(json!({
        "thousands_separator": ",",
        "text_page": "Page",
        "count_pages_pair_limit": 1
    }));
    let result = paginate(1, 2500, 1, &config).unwrap();

    let last = result.links.last().unwrap();
    assert_eq!(last.page, 2500);
    assert_eq!(last.text, "Page 2,500");
    assert_eq!(last.href, "2500");
}

#[test]
fn test_escaping_disabled() {
    let config = config(json!({
        "esc_attr": false,
        "esc_html": false,
        "text_page": "<b>{{PAGE}}</b>"
    }));
    let result = paginate(1, 2, 1, &config).unwrap();

    assert_eq!(result.links[0].href, "#");
    assert_eq!(result.links[0].aria_label, "Page 1");
    assert_eq!(result.links[1].text, "<b>2</b>");
}

#[test]
fn test_dots_item_attributes() {
    let config = config(json!({
        "use_dots": true,
        "text_dots": "<...>",
        "item_dots_attrs": "class=\"gap\"",
        "dot_attrs": "data-dot",
        "count_pages_pair_adjacent": 0
    }));
    let result = paginate(5, 10, 1, &config).unwrap();

    assert_eq!(
        result.links[0],
        Item::dots("&lt;...&gt;", "class=\"gap\"", "data-dot")
    );
    assert_eq!(result.links[0].page, 0);
    assert!(result.links[0].href.is_empty());
}

// ============================================================================
// Escaping Failure Tests
// ============================================================================

#[test_case(json!({"text_previous": "前", "always_use_previous": true}), RenderField::PreviousText ; "previous text")]
#[test_case(json!({"aria_label_previous": "前", "always_use_previous": true}), RenderField::PreviousAttr ; "previous aria label")]
#[test_case(json!({"text_next": "前", "always_use_next": true}), RenderField::NextText ; "next text")]
#[test_case(json!({"aria_label_next": "前", "always_use_next": true}), RenderField::NextAttr ; "next aria label")]
#[test_case(json!({"aria_label_link": "前"}), RenderField::ItemAttr ; "item aria label")]
#[test_case(json!({"url": "/前/"}), RenderField::ItemAttr ; "item href")]
#[test_case(json!({"text_page": "前"}), RenderField::ItemText ; "item text")]
#[test_case(json!({"text_dots": "前", "use_dots": true, "count_pages_pair_adjacent": 0}), RenderField::ItemText ; "dots text")]
fn test_escape_failure_names_field(values: serde_json::Value, field: RenderField) {
    let config = config(values).with_charset(Charset::Ascii);
    let err = paginate(5, 10, 1, &config).unwrap_err();

    assert!(matches!(err, Error::Rendering { .. }));
    assert_eq!(err.render_field(), Some(field));
}

#[test]
fn test_escape_failure_ignored_when_escaping_off() {
    let config = config(json!({
        "text_page": "前",
        "aria_label_link": "前",
        "esc_attr": false,
        "esc_html": false
    }))
    .with_charset(Charset::Ascii);

    assert!(paginate(5, 10, 1, &config).is_ok());
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_result_serializes_absent_links_as_null() {
    let result = paginate(1, 2, 1, &PaginationConfig::default()).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert!(value["previous"].is_null());
    assert!(value["next"].is_null());
    assert_eq!(value["links"][0]["is_current"], json!(true));
    assert_eq!(value["links"][1]["href"], json!("2"));

    let back: PaginationResult = serde_json::from_value(value).unwrap();
    assert_eq!(back, result);
}
