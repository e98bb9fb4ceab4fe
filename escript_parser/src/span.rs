//! Source location tracking
//!
//! Every AST node and token carries a `Span` with byte offsets and
//! 1-indexed line/column positions for both ends.

use serde::{Deserialize, Serialize};

/// A region of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset start (0-indexed)
    pub start: usize,
    /// Byte offset end (exclusive)
    pub end: usize,
    /// Line number (1-indexed)
    pub start_line: usize,
    /// Line number (1-indexed)
    pub end_line: usize,
    /// Column (1-indexed, in bytes)
    pub start_column: usize,
    /// Column (1-indexed, in bytes)
    pub end_column: usize,
}

impl Span {
    /// Create a new span
    pub fn new(
        start: usize,
        end: usize,
        start_line: usize,
        end_line: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            start,
            end,
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }

    /// Create an empty span at position 0
    pub fn empty() -> Self {
        Self::default()
    }

    /// The smallest span covering both `self` and `other`
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            start_line: self.start_line.min(other.start_line),
            end_line: self.end_line.max(other.end_line),
            start_column: if self.start <= other.start {
                self.start_column
            } else {
                other.start_column
            },
            end_column: if self.end >= other.end {
                self.end_column
            } else {
                other.end_column
            },
        }
    }

    /// Length of the span in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span covers no text
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Maps byte offsets to line/column pairs
#[derive(Debug, Clone)]
pub struct SourceMap {
    /// Byte offsets at which each line starts
    line_starts: Vec<usize>,
}

impl SourceMap {
    /// Build the line table for `source`
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in source.char_indices() {
            // U+2028 and U+2029 are line terminators in ECMAScript
            if c == '\n' || c == '\u{2028}' || c == '\u{2029}' {
                line_starts.push(i + c.len_utf8());
            } else if c == '\r' {
                // CRLF counts as a single terminator; the LF branch above
                // would otherwise record a second line start
                if source.as_bytes().get(i + 1) != Some(&b'\n') {
                    line_starts.push(i + 1);
                }
            }
        }
        Self { line_starts }
    }

    /// Line and column (both 1-indexed) for a byte offset
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let column = offset - line_start + 1;
        (line + 1, column)
    }

    /// Create a span with line/column information for a byte range
    pub fn span(&self, start: usize, end: usize) -> Span {
        let (start_line, start_column) = self.line_col(start);
        let (end_line, end_column) = self.line_col(end);
        Span {
            start,
            end,
            start_line,
            end_line,
            start_column,
            end_column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_map() {
        let source = "var x;\nx = 1;\n";
        let map = SourceMap::new(source);

        assert_eq!(map.line_col(0), (1, 1)); // 'v'
        assert_eq!(map.line_col(4), (1, 5)); // 'x'
        assert_eq!(map.line_col(7), (2, 1)); // 'x'
        assert_eq!(map.line_col(11), (2, 5)); // '1'
    }

    #[test]
    fn test_source_map_crlf() {
        let source = "a;\r\nb;";
        let map = SourceMap::new(source);

        assert_eq!(map.line_col(0), (1, 1));
        assert_eq!(map.line_col(4), (2, 1));
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(0, 5, 1, 1, 1, 6);
        let b = Span::new(10, 15, 2, 2, 5, 10);
        let merged = a.merge(&b);

        assert_eq!(merged.start, 0);
        assert_eq!(merged.end, 15);
        assert_eq!(merged.start_line, 1);
        assert_eq!(merged.end_line, 2);
    }
}
