//! Flat offset to line/column mapping.
//!
//! Offsets handed in are the byte offsets the regex engine reports; the
//! columns handed out count Unicode code points. A `LineIndex` is built once
//! per text and never mutated, so every lookup is independent of the ones
//! before it.

use tower_lsp::lsp_types::Position;

/// Zero-based line of an offset together with the byte offset its line starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStart {
    pub line: u32,
    pub offset: usize,
}

/// Byte offsets of every line start in one text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0usize];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Line containing `byte_offset`: newlines strictly before it, and where
    /// that line begins. Offsets past the end clamp to the end.
    pub fn line_start(
        &self,
        byte_offset: usize,
    ) -> LineStart {
        let offset = byte_offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        LineStart {
            line: line as u32,
            offset: self.line_starts[line],
        }
    }

    pub fn position(
        &self,
        byte_offset: usize,
    ) -> Position {
        let offset = byte_offset.min(self.source.len());
        let start = self.line_start(offset);
        let column = self.source[start.offset..].char_indices().take_while(|(idx, _)| start.offset + idx < offset).count();
        Position::new(start.line, column as u32)
    }
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
