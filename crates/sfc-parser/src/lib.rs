//! Vue Single File Component container parser.
//!
//! Splits a `.vue` source into its script, script setup, template and style
//! blocks. This is the container boundary of the converter: only block
//! boundaries and attributes are interpreted here, block contents are
//! passed along untouched.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::*;
pub use error::{ErrorCode, ParseError, ParseResult};
pub use parser::parse_sfc;
pub use source_map::{LineCol, LineIndex, Span};

/// Parse a Vue SFC source into its blocks.
pub fn parse(source: &str) -> ParseResult<Sfc> {
    parse_sfc(source)
}
