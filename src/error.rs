//! Error types for template parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in template source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while parsing template text into a [`Template`].
///
/// Line and column numbers are 1-based positions within the template text:
/// the legend is line 1 and the first grid row is line 2. Columns count
/// characters, not bytes.
///
/// [`Template`]: crate::template::Template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The text never leaves the legend line, so there is no grid at all.
    #[error("template has no grid: expected a newline after the legend line")]
    MissingGrid { span: Span },

    /// The legend line contains no symbols once whitespace is stripped.
    #[error("template legend is empty: at least one frame symbol is required")]
    EmptyLegend { span: Span },

    /// `.` and `#` already mean something in the grid and cannot name frames.
    #[error("'{symbol}' at line {line}, column {column} is reserved and cannot be used as a frame symbol")]
    ReservedSymbol {
        symbol: char,
        line: usize,
        column: usize,
        span: Span,
    },

    /// The same character appears twice in the legend.
    #[error("duplicate frame symbol '{symbol}' at line {line}, column {column}")]
    DuplicateSymbol {
        symbol: char,
        line: usize,
        column: usize,
        span: Span,
    },

    /// The legend declares more symbols than a frame index can address.
    #[error("legend declares more than 256 frame symbols; frame indices are 8-bit")]
    TooManySymbols {
        line: usize,
        column: usize,
        span: Span,
    },

    /// A grid character is neither `.`, `#`, a space, nor a legend symbol.
    #[error("unrecognized grid character {ch:?} at line {line}, column {column}")]
    UnknownCell {
        ch: char,
        line: usize,
        column: usize,
        span: Span,
    },
}

impl TemplateError {
    /// Byte range of the offending text.
    pub fn span(&self) -> &Span {
        match self {
            TemplateError::MissingGrid { span }
            | TemplateError::EmptyLegend { span }
            | TemplateError::ReservedSymbol { span, .. }
            | TemplateError::DuplicateSymbol { span, .. }
            | TemplateError::TooManySymbols { span, .. }
            | TemplateError::UnknownCell { span, .. } => span,
        }
    }

    /// 1-based (line, column) of the offending character, when the error
    /// points at one.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            TemplateError::MissingGrid { .. } | TemplateError::EmptyLegend { .. } => None,
            TemplateError::ReservedSymbol { line, column, .. }
            | TemplateError::DuplicateSymbol { line, column, .. }
            | TemplateError::TooManySymbols { line, column, .. }
            | TemplateError::UnknownCell { line, column, .. } => Some((*line, *column)),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let label = match self {
            TemplateError::MissingGrid { .. } => "expected grid rows after this line",
            TemplateError::EmptyLegend { .. } => "this legend declares no symbols",
            TemplateError::ReservedSymbol { .. } => "'.' and '#' already mean something in the grid",
            TemplateError::DuplicateSymbol { .. } => "already declared earlier in the legend",
            TemplateError::TooManySymbols { .. } => "symbol number 257 starts here",
            TemplateError::UnknownCell { .. } => "not '.', '#', a space, or a legend symbol",
        };

        // ariadne addresses its Source by character offset; spans index
        // bytes of the template text.
        let span = self.span();
        let start = source[..span.start].chars().count();
        let end = start + source[span.start..span.end].chars().count();

        let mut buf = Vec::new();
        Report::build(ReportKind::Error, filename, start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }
}
