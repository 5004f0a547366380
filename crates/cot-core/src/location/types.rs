/// Where to put the caret in the first opened document.
///
/// `line` is 1-based and may be negative to count from the end. `column` is
/// 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationRequest {
    pub line: Option<i64>,
    pub column: Option<i64>,
}

impl LocationRequest {
    pub fn new(line: Option<i64>, column: Option<i64>) -> Self {
        Self { line, column }
    }

    /// Whether any part of a location was given.
    pub fn is_requested(&self) -> bool {
        self.line.is_some() || self.column.is_some()
    }

    /// Character offset of this location in `text`.
    pub fn offset_in(&self, text: &str) -> usize {
        super::resolve_offset(text, self.line, self.column)
    }
}
