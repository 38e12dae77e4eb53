//! Frontmatter types and data structures.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

/// Represents parsed YAML frontmatter from a markdown document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed frontmatter (if present).
    pub frontmatter: Option<Frontmatter>,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}

impl Frontmatter {
    /// Tags listed under `tags`, without a leading `#`.
    ///
    /// Accepts a YAML list or a single string separated by commas or spaces.
    pub fn tags(&self) -> Vec<String> {
        let Some(value) = self.fields.get("tags") else {
            return Vec::new();
        };

        let raw: Vec<String> = match value {
            Value::Sequence(items) => items.iter().filter_map(scalar_to_string).collect(),
            Value::String(s) => s
                .split(|c: char| c == ',' || c.is_whitespace())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        raw.iter()
            .map(|t| t.trim().trim_start_matches('#').to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Whether `tag` appears in [`Frontmatter::tags`], ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim_start_matches('#');
        self.tags().iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Display alias of the note.
    ///
    /// `alias` wins when set. Otherwise the first entry of `aliases` (a list
    /// or a comma-separated string) is used. Blank values yield `None`.
    pub fn alias(&self) -> Option<String> {
        // A blank `alias` counts as unset.
        if let Some(alias) =
            self.fields.get("alias").and_then(scalar_to_string).and_then(|a| non_blank(&a))
        {
            return Some(alias);
        }

        let first = match self.fields.get("aliases")? {
            Value::Sequence(items) => items.first().and_then(scalar_to_string)?,
            Value::String(s) => s.split(',').next().unwrap_or_default().to_string(),
            other => scalar_to_string(other)?,
        };
        non_blank(&first)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
