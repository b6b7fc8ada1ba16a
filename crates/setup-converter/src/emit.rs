//! Assembly and formatting of the converted fragments.

use crate::error::{ConvertError, ConvertResult};
use script_query::{ScriptAst, ScriptLang};

/// Concatenate the import text, props declaration and setup statements in
/// fixed order, then format the result for the target mode. This is the
/// single externally observable output of the pipeline.
pub fn assemble(
    imports: &str,
    props: &str,
    setup: &str,
    lang: ScriptLang,
) -> ConvertResult<String> {
    let mut out = String::new();
    for fragment in [imports, props, setup] {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(fragment);
    }
    format(&out, lang)
}

/// Validate that `text` parses as top-level statements in the target mode,
/// then apply light style normalization: trailing whitespace removed, blank
/// runs collapsed to one line, exactly one trailing newline. Invalid text is
/// a [`ConvertError::FormatFailure`]; it is never masked or retried.
pub fn format(text: &str, lang: ScriptLang) -> ConvertResult<String> {
    ScriptAst::parse(text, lang).map_err(|e| ConvertError::FormatFailure(e.to_string()))?;
    Ok(normalize(text))
}

fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 1);
    let mut blank_run = 0usize;
    for line in text.trim().lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}
