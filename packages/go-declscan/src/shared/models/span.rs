//! Source location types
//!
//! Lines are 1-indexed, columns are 0-indexed byte offsets within the line.

/// Span in source code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Create a zero span (0:0-0:0)
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// True when `next` starts on the line right after this span ends
    pub fn is_directly_above(&self, next: &Span) -> bool {
        self.end_line + 1 == next.start_line
    }
}
