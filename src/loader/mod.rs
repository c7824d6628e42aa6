//! Configuration loader module
//!
//! Parse pagination configuration from YAML or JSON documents.
//!
//! # Overview
//!
//! The loader turns a document such as
//!
//! ```yaml
//! url: /articles?page={{PAGE}}
//! use_dots: true
//! count_pages_pair_limit: 1
//! ```
//!
//! into a [`PaginationConfig`](crate::config::PaginationConfig). Values go
//! through the same coercion as
//! [`PaginationConfig::apply`](crate::config::PaginationConfig::apply).

mod parser;

pub use parser::{load_config_from_str, load_values_from_str};
