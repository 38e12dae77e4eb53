//! Link markup for inserted mentions.

use serde::{Deserialize, Serialize};

use crate::host::{LinkFormatter, NoteRef};

/// How links are written into notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// `[[name|alias]]`
    #[default]
    Wikilink,
    /// `[alias](path.md)`
    Markdown,
}

impl LinkStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStyle::Wikilink => "wikilink",
            LinkStyle::Markdown => "markdown",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VaultLinks {
    pub style: LinkStyle,
}

impl VaultLinks {
    pub fn new(style: LinkStyle) -> Self {
        Self { style }
    }
}

impl LinkFormatter for VaultLinks {
    fn format_link(&self, target: &NoteRef, _source_path: &str, alias: Option<&str>) -> String {
        let alias = alias.filter(|a| *a != target.basename);
        match self.style {
            LinkStyle::Wikilink => match alias {
                Some(alias) => format!("[[{}|{}]]", target.basename, alias),
                None => format!("[[{}]]", target.basename),
            },
            LinkStyle::Markdown => {
                let text = alias.unwrap_or(&target.basename);
                format!("[{}]({})", text, encode_path(&target.path))
            }
        }
    }
}

fn encode_path(path: &str) -> String {
    path.replace('%', "%25").replace(' ', "%20").replace('(', "%28").replace(')', "%29")
}
