//! Error types for SFC container parsing.

use source_map::{LineCol, LineIndex, Span};
use std::fmt;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred while splitting an SFC into blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The span where the error occurred.
    pub span: Span,
    /// The error code.
    pub code: ErrorCode,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(message: impl Into<String>, span: Span, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            span,
            code,
        }
    }

    /// Create a duplicate block error.
    pub fn duplicate_block(block: &str, span: Span) -> Self {
        Self::new(
            format!("Duplicate {} block", block),
            span,
            ErrorCode::DuplicateBlock,
        )
    }

    /// Create an unclosed block error.
    pub fn unclosed_block(tag: &str, span: Span) -> Self {
        Self::new(
            format!("Unclosed block: <{}>", tag),
            span,
            ErrorCode::UnclosedBlock,
        )
    }

    /// Line and column of the error's start, both 0-indexed. The index must
    /// be built over the same source the error came from.
    pub fn line_col(&self, index: &LineIndex) -> LineCol {
        index.line_col(self.span.start)
    }

    /// The message with a 1-indexed `line:column` position appended.
    pub fn message_at(&self, index: &LineIndex) -> String {
        let pos = self.line_col(index);
        format!("{} at {}:{}", self.message, pos.line + 1, pos.col + 1)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Error codes for categorizing parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Two blocks of a kind that allows only one (e.g. two <script> blocks).
    DuplicateBlock,
    /// A block tag with no matching closing tag.
    UnclosedBlock,
    /// Malformed block content.
    InvalidContent,
}

impl ErrorCode {
    /// The error code as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DuplicateBlock => "duplicate-block",
            ErrorCode::UnclosedBlock => "unclosed-block",
            ErrorCode::InvalidContent => "invalid-content",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
