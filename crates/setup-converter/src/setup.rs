//! Setup extraction: lifts the setup function's body to top-level
//! statements, dropping its return statement.

use crate::error::{ConvertError, ConvertResult};
use script_query::{find_first, FoundNode, NodeKind, ScriptAst};
use swc_common::{Span, Spanned};
use swc_ecma_ast::{BlockStmt, CallExpr, Stmt};

/// Convert the setup method of the definition call into top-level script
/// statements.
///
/// Every return statement among the body's direct children is removed;
/// returns nested inside inner blocks or closures are untouched. Surviving
/// statements keep their original order and formatting.
pub fn convert_setup(call: &CallExpr, ast: &ScriptAst) -> ConvertResult<String> {
    let Some(FoundNode::MethodProp(method)) = find_first(call, NodeKind::MethodProp) else {
        return Err(ConvertError::SetupNotFound);
    };

    let Some(FoundNode::BlockStmt(body)) = find_first(&method, NodeKind::BlockStmt) else {
        return Err(ConvertError::SetupNotFound);
    };

    Ok(render_statements(&body, ast))
}

/// Render the kept statements. Consecutive kept statements are sliced as one
/// contiguous source run so the trivia between them survives; runs broken by
/// a removed return are joined with a newline.
fn render_statements(body: &BlockStmt, ast: &ScriptAst) -> String {
    let mut runs: Vec<Span> = Vec::new();
    let mut current: Option<Span> = None;

    for stmt in &body.stmts {
        if matches!(stmt, Stmt::Return(_)) {
            if let Some(run) = current.take() {
                runs.push(run);
            }
            continue;
        }
        let span = stmt.span();
        current = Some(match current {
            Some(run) => run.with_hi(span.hi),
            None => span,
        });
    }
    if let Some(run) = current {
        runs.push(run);
    }

    runs.iter()
        .map(|run| ast.snippet(*run))
        .collect::<Vec<_>>()
        .join("\n")
}
