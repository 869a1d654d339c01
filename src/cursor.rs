//! Cursor / selection positions inside a query buffer.

/// A caret position, optionally extended to a selection ending at `end`.
///
/// Offsets are byte offsets into the buffer the cursor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    start: usize,
    end: Option<usize>,
}

/// 1-based line and column of a cursor, as shown in a status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Ln {line}, Col {column}")]
pub struct LineCol {
    pub line: usize,
    /// Counted in characters, not bytes.
    pub column: usize,
}

/// Buffer totals shown next to the cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{chars} chars, {lines} lines")]
pub struct TextStats {
    pub chars: usize,
    pub lines: usize,
}

impl Cursor {
    pub fn new(start: usize, end: Option<usize>) -> Self {
        Self { start, end }
    }

    /// A caret with no selection.
    pub fn at(offset: usize) -> Self {
        Self::new(offset, None)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// True when `start` (and `end`, if any) fit inside `source`.
    pub fn is_within(&self, source: &str) -> bool {
        self.start <= source.len() && self.end.is_none_or(|end| end <= source.len())
    }

    /// Pull both offsets into `source`: past-the-end offsets become
    /// `source.len()` and offsets inside a multi-byte character move back to
    /// that character's first byte.
    pub fn clamp(&self, source: &str) -> Self {
        let fit = |offset: usize| {
            let mut offset = offset.min(source.len());
            while !source.is_char_boundary(offset) {
                offset -= 1;
            }
            offset
        };
        let start = fit(self.start);
        Self {
            start,
            end: self.end.map(|end| fit(end).max(start)),
        }
    }

    /// Line and column of `start` within `source`.
    pub fn line_col(&self, source: &str) -> LineCol {
        let before = &source[..self.clamp(source).start];
        let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
        LineCol {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl TextStats {
    pub fn of(source: &str) -> Self {
        Self {
            chars: source.chars().count(),
            lines: source.split('\n').count(),
        }
    }
}
