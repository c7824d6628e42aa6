//! Common types used throughout pagination-html
//!
//! This module contains shared type aliases used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type, the untyped configuration bag
pub type JsonObject = serde_json::Map<String, JsonValue>;
