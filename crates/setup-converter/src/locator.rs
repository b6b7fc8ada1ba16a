//! Locates the `defineComponent(...)` call in a script AST.

use crate::error::{ConvertError, ConvertResult};
use script_query::{find_first, FoundNode, NodeKind, ScriptAst};
use swc_ecma_ast::{CallExpr, Callee, Expr};

/// Find the component-definition call in the script.
///
/// The call is identified structurally: the first call expression in the
/// script whose callee is the plain identifier `defineComponent`. Aliased,
/// namespaced or computed callees are not recognized; a wrong call shape and
/// no call at all fail identically.
pub fn locate_component(ast: &ScriptAst) -> ConvertResult<CallExpr> {
    let Some(FoundNode::CallExpr(call)) = find_first(ast.module(), NodeKind::CallExpr) else {
        return Err(ConvertError::DefinitionNotFound);
    };

    if !is_define_component(&call) {
        return Err(ConvertError::DefinitionNotFound);
    }

    Ok(call)
}

fn is_define_component(call: &CallExpr) -> bool {
    let Callee::Expr(callee) = &call.callee else {
        return false;
    };
    match callee.as_ref() {
        Expr::Ident(ident) => ident.sym.as_ref() == "defineComponent",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use script_query::ScriptLang;

    fn parse(source: &str) -> ScriptAst {
        ScriptAst::parse(source, ScriptLang::Ts).unwrap()
    }

    #[test]
    fn locates_define_component_call() {
        let ast = parse("export default defineComponent({ setup() {} });");
        let call = locate_component(&ast).unwrap();
        assert!(ast.snippet(call.span).starts_with("defineComponent("));
    }

    #[test]
    fn plain_object_export_is_not_found() {
        let ast = parse("export default { setup() {} };");
        assert_eq!(
            locate_component(&ast),
            Err(ConvertError::DefinitionNotFound)
        );
    }

    #[test]
    fn other_call_name_is_not_found() {
        let ast = parse("export default createComponent({ setup() {} });");
        assert_eq!(
            locate_component(&ast),
            Err(ConvertError::DefinitionNotFound)
        );
    }

    #[test]
    fn namespaced_callee_is_not_found() {
        let ast = parse("export default Vue.defineComponent({ setup() {} });");
        assert_eq!(
            locate_component(&ast),
            Err(ConvertError::DefinitionNotFound)
        );
    }

    #[test]
    fn empty_script_is_not_found() {
        let ast = parse("");
        assert_eq!(
            locate_component(&ast),
            Err(ConvertError::DefinitionNotFound)
        );
    }
}
