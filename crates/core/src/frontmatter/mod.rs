//! Frontmatter parsing and field lookup.
//!
//! This module provides functionality to:
//! - Split YAML frontmatter from markdown documents
//! - Read the `tags`, `alias` and `aliases` fields in their common shapes

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, parse};
pub use types::{Frontmatter, ParsedDocument};
