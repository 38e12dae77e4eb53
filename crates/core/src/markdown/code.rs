//! Inline code and code block detection via comrak.

use comrak::nodes::{NodeValue, Sourcepos};
use comrak::{Arena, Options, parse_document};

/// A region of code in source coordinates.
///
/// Lines are zero-based; columns are zero-based byte offsets. Block spans
/// cover whole lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSpan {
    Inline { start: (usize, usize), end: (usize, usize) },
    Block { first_line: usize, last_line: usize },
}

impl CodeSpan {
    /// Whether a cursor at `(line, byte)` touches this span.
    ///
    /// Inline spans include the cursor positions on both delimiters.
    pub fn contains(&self, line: usize, byte: usize) -> bool {
        match *self {
            CodeSpan::Inline { start, end } => start <= (line, byte) && (line, byte) <= end,
            CodeSpan::Block { first_line, last_line } => {
                (first_line..=last_line).contains(&line)
            }
        }
    }

    fn from_sourcepos(value: &NodeValue, pos: Sourcepos) -> Option<Self> {
        // comrak reports 1-based lines and 1-based inclusive byte columns.
        let line = |l: usize| l.saturating_sub(1);
        match value {
            NodeValue::Code(_) => Some(CodeSpan::Inline {
                start: (line(pos.start.line), pos.start.column.saturating_sub(1)),
                end: (line(pos.end.line), pos.end.column),
            }),
            NodeValue::CodeBlock(_) => Some(CodeSpan::Block {
                first_line: line(pos.start.line),
                last_line: line(pos.end.line),
            }),
            _ => None,
        }
    }
}

/// All code regions of `text`, in document order.
pub fn code_spans(text: &str) -> Vec<CodeSpan> {
    let arena = Arena::new();
    let root = parse_document(&arena, text, &parse_options());

    root.descendants()
        .filter_map(|node| {
            let data = node.data.borrow();
            CodeSpan::from_sourcepos(&data.value, data.sourcepos)
        })
        .collect()
}

fn parse_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.tasklist = true;
    options.extension.front_matter_delimiter = Some("---".to_string());
    options.parse.smart = false;
    options
}
