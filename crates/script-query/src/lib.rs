//! Script block AST access for vue-setup-converter.
//!
//! Wraps swc parsing of a script block's text into a queryable [`Module`]
//! and provides the single tree-search primitive ([`find_first`]) plus
//! span-based snippet extraction for rendering nodes back to source text
//! with their original formatting.

pub mod query;

pub use query::{find_first, FoundNode, NodeKind};

use std::sync::Arc;
use swc_common::{FileName, SourceMap, SourceMapper, Span};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use thiserror::Error;

/// An error from parsing a script block.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AstError {
    /// The script text is not syntactically valid.
    #[error("script syntax error: {0}")]
    Syntax(String),
}

/// The script language to parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptLang {
    #[default]
    Js,
    Ts,
}

/// A parsed script block: the swc module together with the source map that
/// produced it. Immutable; queried and sliced, never mutated.
pub struct ScriptAst {
    module: Module,
    source_map: Arc<SourceMap>,
}

impl std::fmt::Debug for ScriptAst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptAst")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

impl ScriptAst {
    /// Parse script text into an AST.
    pub fn parse(source: &str, lang: ScriptLang) -> Result<Self, AstError> {
        let cm: Arc<SourceMap> = Default::default();
        let fm = cm.new_source_file(
            FileName::Custom("component-script".into()).into(),
            source.to_string(),
        );
        let syntax = match lang {
            ScriptLang::Ts => Syntax::Typescript(TsSyntax {
                tsx: false,
                ..Default::default()
            }),
            ScriptLang::Js => Syntax::Es(EsSyntax::default()),
        };
        let mut parser = Parser::new(syntax, StringInput::from(&*fm), None);
        let module = parser
            .parse_module()
            .map_err(|e| AstError::Syntax(e.kind().msg().into_owned()))?;
        if let Some(err) = parser.take_errors().into_iter().next() {
            return Err(AstError::Syntax(err.kind().msg().into_owned()));
        }
        Ok(Self {
            module,
            source_map: cm,
        })
    }

    /// The parsed module.
    pub fn module(&self) -> &Module {
        &self.module
    }

    /// Render the source text covered by `span`, formatting intact.
    ///
    /// Every span handed in comes from a node of this module, so the lookup
    /// cannot fail; a failure would mean emitted output silently lost code.
    pub fn snippet(&self, span: Span) -> String {
        let snippet = self.source_map.span_to_snippet(span);
        debug_assert!(snippet.is_ok(), "span {:?} is not in the parsed source", span);
        snippet.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_typescript() {
        let ast = ScriptAst::parse("const a: number = 1;", ScriptLang::Ts).unwrap();
        assert_eq!(ast.module().body.len(), 1);
    }

    #[test]
    fn parses_javascript() {
        let ast = ScriptAst::parse("var a = 1;", ScriptLang::Js).unwrap();
        assert_eq!(ast.module().body.len(), 1);
    }

    #[test]
    fn js_mode_rejects_type_annotations() {
        assert!(ScriptAst::parse("const a: number = 1;", ScriptLang::Js).is_err());
    }

    #[test]
    fn rejects_broken_syntax() {
        let err = ScriptAst::parse("const = ;", ScriptLang::Ts).unwrap_err();
        let AstError::Syntax(_) = err;
    }

    #[test]
    fn empty_source_is_an_empty_module() {
        let ast = ScriptAst::parse("", ScriptLang::Ts).unwrap();
        assert!(ast.module().body.is_empty());
    }

    #[test]
    fn snippet_preserves_formatting() {
        let source = "const a = {\n  b: 1,\n};";
        let ast = ScriptAst::parse(source, ScriptLang::Ts).unwrap();
        use swc_common::Spanned;
        let stmt = &ast.module().body[0];
        assert_eq!(ast.snippet(stmt.span()), source);
    }
}
