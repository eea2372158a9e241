/// Conditions the extractor recovered from on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    TableNotFound,
    TitleMissing,
    MalformedSpan,
    SpanClipped,
    RowWidthMismatch,
    EmptyGrid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractWarning {
    pub code: WarningCode,
    pub message: String,
    pub row: Option<usize>,
    pub col: Option<usize>,
}

impl ExtractWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            row: None,
            col: None,
        }
    }

    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    #[must_use]
    pub fn with_col(mut self, col: usize) -> Self {
        self.col = Some(col);
        self
    }
}
