//! In-memory markdown document used as the editor buffer.

mod buffer;
mod code;

pub use buffer::TextBuffer;
pub use code::{CodeSpan, code_spans};
