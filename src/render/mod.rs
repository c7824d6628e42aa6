//! HTML rendering
//!
//! Serializes a [`PaginationResult`] into markup:
//!
//! ```text
//! <nav aria-label="Pagination">           depth 0 (optional landmark)
//!     <ul>                                depth 0, +1 inside nav
//!         <li>                            depth 1
//!             <a href="2" ...>2</a>       depth 2
//!         </li>
//!     </ul>
//! </nav>
//! ```
//!
//! Items and hrefs arrive already escaped from the windowing engine. Tag
//! names and raw attribute strings are inserted verbatim. The only value
//! escaped here is the nav aria label.

mod writer;

pub use writer::{attribute, close_tag, open_tag, HtmlWriter};

use crate::config::PaginationConfig;
use crate::error::{EscapeResultExt, RenderField, Result};
use crate::escape::escape_attr;
use crate::pagination::{Item, PaginationResult};

const ARIA_HIDDEN: &str = "aria-hidden=\"true\"";
const ARIA_DISABLED: &str = "aria-disabled=\"true\"";
const ARIA_CURRENT: &str = "aria-current=\"page\"";

/// Render a pagination result to HTML
pub fn render(result: &PaginationResult, config: &PaginationConfig) -> Result<String> {
    let mut writer = HtmlWriter::new(
        config.use_pretty_html,
        config.html_tab_sequence.as_str(),
        config.html_initial_indentation,
    );

    if config.use_nav {
        let label = nav_label(config)?;
        writer.line(0, &open_tag("nav", &[label.as_str(), config.nav_attrs.as_str()]));
        writer.indent();
    }

    writer.line(0, &open_tag(config.root_tag(), &[config.root_attrs.as_str()]));
    for item in result.iter() {
        render_item(&mut writer, item, config);
    }
    writer.line(0, &close_tag(config.root_tag()));

    if config.use_nav {
        writer.dedent();
        writer.line(0, &close_tag("nav"));
    }

    Ok(writer.finish())
}

/// Build the `aria-label` attribute of the nav landmark
fn nav_label(config: &PaginationConfig) -> Result<String> {
    let label = if config.esc_attr {
        escape_attr(&config.aria_label_nav, config.charset).for_field(RenderField::NavAttr)?
    } else {
        config.aria_label_nav.clone()
    };
    Ok(attribute("aria-label", &label))
}

fn render_item(writer: &mut HtmlWriter, item: &Item, config: &PaginationConfig) {
    let item_tag = config.item_tag();

    if item.is_dots {
        let dot_tag = config.dot_tag();
        writer.line(1, &open_tag(item_tag, &[item.item_attrs.as_str(), ARIA_HIDDEN]));
        writer.line(
            2,
            &format!(
                "{}{}{}",
                open_tag(dot_tag, &[item.link_attrs.as_str()]),
                item.text,
                close_tag(dot_tag)
            ),
        );
    } else {
        let link_tag = config.link_tag();
        let href = attribute("href", &item.href);
        let aria_label = attribute("aria-label", &item.aria_label);
        let disabled = if item.is_disabled { ARIA_DISABLED } else { "" };
        let current = if item.is_current { ARIA_CURRENT } else { "" };

        writer.line(1, &open_tag(item_tag, &[item.item_attrs.as_str()]));
        writer.line(
            2,
            &format!(
                "{}{}{}",
                open_tag(
                    link_tag,
                    &[
                        item.link_attrs.as_str(),
                        href.as_str(),
                        aria_label.as_str(),
                        disabled,
                        current,
                    ]
                ),
                item.text,
                close_tag(link_tag)
            ),
        );
    }

    writer.line(1, &close_tag(item_tag));
}
