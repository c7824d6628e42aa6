// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]

//! # pagination-html
//!
//! Pagination links for server-rendered pages: decide which page numbers to
//! show and render them as an accessible HTML fragment.
//!
//! ## Features
//!
//! - **Windowing**: limit window at both ends, adjacent window around the current page
//! - **Ellipses**: one dots item per collapsed run of pages
//! - **Previous/Next**: optional, or forced and rendered disabled at the edges
//! - **Templating**: `{{PAGE}}` in urls, texts, aria labels and attributes
//! - **Escaping**: contextual text and attribute escaping on by default
//! - **Clamping**: out-of-range numbers are clamped, never rejected
//!
//! ## Quick Start
//!
//! ```rust
//! use pagination_html::{Paginator, PaginationConfig};
//!
//! let config = PaginationConfig::new()
//!     .with_url("/articles?page=")
//!     .with_pretty_html(false)
//!     .with_nav(false);
//! let paginator = Paginator::with_config(config);
//!
//! let html = paginator.generate_html(1, 20, 10)?;
//! assert!(html.starts_with("<ul><li><a href=\"&#x23;\""));
//!
//! let data = paginator.generate_data(1, 20, 10)?;
//! assert_eq!(data.links.len(), 2);
//! # Ok::<(), pagination_html::Error>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! (current, total, per_page) ──► pagination::paginate ──► PaginationResult ──► render::render ──► HTML
//!                                        ▲                                           ▲
//!                                        └──────────── PaginationConfig ─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document the remaining config fields and variants before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Typed configuration and key/value coercion
pub mod config;

/// YAML/JSON loader for configuration
pub mod loader;

/// `{{PAGE}}` template interpolation
pub mod template;

/// HTML text and attribute escaping
pub mod escape;

/// Page window selection
pub mod pagination;

/// HTML rendering
pub mod render;

/// Paginator facade
pub mod paginator;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, RenderField, Result};
pub use types::*;

// Re-export commonly used types
pub use config::PaginationConfig;
pub use escape::{Charset, EscapeError};
pub use loader::load_config_from_str;
pub use pagination::{Item, PaginationResult};
pub use paginator::Paginator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
