//! Converts a Vue Options API component to `<script setup>` style.
//!
//! The pipeline takes one SFC source string and produces the composition
//! style script text: the original imports, a `defineProps` declaration
//! derived from the `props` option, and the setup function's body lifted to
//! top-level statements with its return removed.
//!
//! ```
//! use setup_converter::convert_src;
//!
//! let source = r#"<script>
//! import { defineComponent, ref } from 'vue';
//!
//! export default defineComponent({
//!   props: { msg: String },
//!   setup() {
//!     const count = ref(0);
//!     return { count };
//!   },
//! });
//! </script>"#;
//!
//! let output = convert_src(source).unwrap();
//! assert!(output.contains("const props = defineProps({ msg: String });"));
//! ```
//!
//! Each call is a pure function of its input: no state is shared or
//! retained, so callers may run conversions in parallel freely.

pub mod emit;
pub mod error;
pub mod locator;
pub mod props;
pub mod setup;

pub use emit::{assemble, format};
pub use error::{ConvertError, ConvertResult};
pub use locator::locate_component;
pub use props::{
    classify_props, convert_props, PropEntry, PropOptions, PropSpec, PropsSpec, PropsStyle,
};
pub use script_query::ScriptLang;
pub use setup::convert_setup;

use script_query::{find_first, FoundNode, NodeKind, ScriptAst};

/// Options for a conversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// How the props declaration is emitted.
    pub props_style: PropsStyle,
}

/// Convert an SFC source with default options.
pub fn convert_src(source: &str) -> ConvertResult<String> {
    convert_src_with(source, ConvertOptions::default())
}

/// Convert an SFC source into composition style script text.
///
/// Fails when the script has no `defineComponent` call, when props or setup
/// cannot be extracted, or when the assembled output does not parse in the
/// target mode. A failed conversion produces no output at all; the caller
/// keeps the original source.
pub fn convert_src_with(source: &str, options: ConvertOptions) -> ConvertResult<String> {
    let sfc = sfc_parser::parse(source)
        .map_err(|e| ConvertError::Parse(e.message_at(&sfc_parser::LineIndex::new(source))))?;

    let script = sfc
        .script
        .as_ref()
        .map(|s| s.content.as_str())
        .unwrap_or("");
    let lang = if sfc.is_typescript() {
        ScriptLang::Ts
    } else {
        ScriptLang::Js
    };

    let ast = ScriptAst::parse(script, lang).map_err(|e| ConvertError::Parse(e.to_string()))?;
    let call = locate_component(&ast)?;

    let props = convert_props(&call, &ast, options.props_style)?;
    let setup = convert_setup(&call, &ast)?;
    let imports = import_text(&ast);

    assemble(&imports, &props, &setup, lang)
}

/// The first import declaration's source text, or empty when none exists.
/// Absent imports are not an error.
fn import_text(ast: &ScriptAst) -> String {
    match find_first(ast.module(), NodeKind::ImportDecl) {
        Some(FoundNode::ImportDecl(import)) => ast.snippet(import.span),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_text_is_empty_without_imports() {
        let ast = ScriptAst::parse("const a = 1;", ScriptLang::Js).unwrap();
        assert_eq!(import_text(&ast), "");
    }

    #[test]
    fn import_text_takes_first_declaration() {
        let ast = ScriptAst::parse(
            "import { ref } from 'vue';\nimport { other } from './other';",
            ScriptLang::Ts,
        )
        .unwrap();
        assert_eq!(import_text(&ast), "import { ref } from 'vue';");
    }
}
