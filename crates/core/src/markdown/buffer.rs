use crate::host::{CodeRegions, EditorBuffer, Position};

use super::code::code_spans;

/// A line-oriented text document.
///
/// Positions use character columns. Out-of-range positions are clamped to
/// the end of the line or document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self { lines: text.split('\n').map(str::to_string).collect() }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of characters on `row`, zero past the end.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    /// Position after the last character of the document.
    pub fn end(&self) -> Position {
        let row = self.lines.len() - 1;
        Position::new(row, self.line_len(row))
    }

    /// Insert a character at `pos` and return the cursor after it.
    pub fn insert(&mut self, pos: Position, c: char) -> Position {
        let mut tmp = [0u8; 4];
        self.insert_str(pos, c.encode_utf8(&mut tmp))
    }

    /// Insert text at `pos` and return the cursor after it.
    pub fn insert_str(&mut self, pos: Position, text: &str) -> Position {
        let pos = self.clamp(pos);
        self.replace_range(text, pos, pos);

        match text.rsplit_once('\n') {
            Some((head, tail)) => Position::new(
                pos.line + head.matches('\n').count() + 1,
                tail.chars().count(),
            ),
            None => Position::new(pos.line, pos.ch + text.chars().count()),
        }
    }

    pub fn insert_at_end(&mut self, c: char) -> Position {
        let end = self.end();
        self.insert(end, c)
    }

    /// Delete the character before `pos` (joining lines at a line start)
    /// and return the new cursor.
    pub fn delete_before(&mut self, pos: Position) -> Position {
        let pos = self.clamp(pos);
        let from = match (pos.line, pos.ch) {
            (0, 0) => return pos,
            (line, 0) => Position::new(line - 1, self.line_len(line - 1)),
            (line, ch) => Position::new(line, ch - 1),
        };
        self.replace_range("", from, pos);
        from
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        Position::new(line, pos.ch.min(self.line_len(line)))
    }

    fn byte_offset(&self, pos: Position) -> usize {
        let line = &self.lines[pos.line];
        line.char_indices().nth(pos.ch).map_or(line.len(), |(i, _)| i)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl EditorBuffer for TextBuffer {
    fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    fn get_range(&self, from: Position, to: Position) -> String {
        let (from, to) = (self.clamp(from), self.clamp(to));
        if from >= to {
            return String::new();
        }

        let (start, end) = (self.byte_offset(from), self.byte_offset(to));
        if from.line == to.line {
            return self.lines[from.line][start..end].to_string();
        }

        let mut out = self.lines[from.line][start..].to_string();
        for line in &self.lines[from.line + 1..to.line] {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        out.push_str(&self.lines[to.line][..end]);
        out
    }

    fn replace_range(&mut self, text: &str, from: Position, to: Position) {
        let (mut from, mut to) = (self.clamp(from), self.clamp(to));
        if from > to {
            std::mem::swap(&mut from, &mut to);
        }

        let prefix = &self.lines[from.line][..self.byte_offset(from)];
        let suffix = &self.lines[to.line][self.byte_offset(to)..];
        let joined = format!("{prefix}{text}{suffix}");

        let replacement: Vec<String> = joined.split('\n').map(str::to_string).collect();
        self.lines.splice(from.line..=to.line, replacement);
    }
}

impl CodeRegions for TextBuffer {
    fn is_in_code(&self, pos: Position) -> bool {
        let pos = self.clamp(pos);
        let byte = self.byte_offset(pos);
        code_spans(&self.text()).iter().any(|span| span.contains(pos.line, byte))
    }
}
