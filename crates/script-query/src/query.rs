//! First-match tree queries over the script AST.
//!
//! Every "find the X node" operation in the converter goes through
//! [`find_first`]: a pre-order depth-first walk that stops at the first node
//! of the requested kind. Matches are returned as owned clones because the
//! visitor callbacks cannot let a borrow escape; the trees involved are
//! small and never mutated.

use swc_ecma_ast::{
    ArrayLit, BlockStmt, CallExpr, Ident, ImportDecl, KeyValueProp, MethodProp, ObjectLit,
    ReturnStmt,
};
use swc_ecma_visit::{Visit, VisitWith};

/// The node kinds the conversion pipeline queries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A call expression, e.g. `defineComponent(...)`.
    CallExpr,
    /// A plain identifier.
    Ident,
    /// An object literal.
    ObjectLit,
    /// An array literal.
    ArrayLit,
    /// A `key: value` property assignment.
    KeyValueProp,
    /// A method-shaped object member, e.g. `setup() { ... }`.
    MethodProp,
    /// A `{ ... }` statement block.
    BlockStmt,
    /// A return statement.
    ReturnStmt,
    /// An import declaration.
    ImportDecl,
}

/// An owned copy of the first node matching a [`NodeKind`].
#[derive(Debug, Clone)]
pub enum FoundNode {
    CallExpr(CallExpr),
    Ident(Ident),
    ObjectLit(ObjectLit),
    ArrayLit(ArrayLit),
    KeyValueProp(KeyValueProp),
    MethodProp(MethodProp),
    BlockStmt(BlockStmt),
    ReturnStmt(ReturnStmt),
    ImportDecl(ImportDecl),
}

impl FoundNode {
    /// The kind tag of the matched node.
    pub fn kind(&self) -> NodeKind {
        match self {
            FoundNode::CallExpr(_) => NodeKind::CallExpr,
            FoundNode::Ident(_) => NodeKind::Ident,
            FoundNode::ObjectLit(_) => NodeKind::ObjectLit,
            FoundNode::ArrayLit(_) => NodeKind::ArrayLit,
            FoundNode::KeyValueProp(_) => NodeKind::KeyValueProp,
            FoundNode::MethodProp(_) => NodeKind::MethodProp,
            FoundNode::BlockStmt(_) => NodeKind::BlockStmt,
            FoundNode::ReturnStmt(_) => NodeKind::ReturnStmt,
            FoundNode::ImportDecl(_) => NodeKind::ImportDecl,
        }
    }
}

/// Find the first node of `kind` in pre-order within the tree rooted at
/// `root` (the root itself included). Absence is `None`, not an error.
pub fn find_first<N>(root: &N, kind: NodeKind) -> Option<FoundNode>
where
    N: VisitWith<FirstMatch>,
{
    let mut visitor = FirstMatch { kind, hit: None };
    root.visit_with(&mut visitor);
    visitor.hit
}

/// Visitor backing [`find_first`]. Records the first match and stops
/// descending once one is found.
pub struct FirstMatch {
    kind: NodeKind,
    hit: Option<FoundNode>,
}

impl Visit for FirstMatch {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::CallExpr {
            self.hit = Some(FoundNode::CallExpr(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_ident(&mut self, node: &Ident) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::Ident {
            self.hit = Some(FoundNode::Ident(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_object_lit(&mut self, node: &ObjectLit) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::ObjectLit {
            self.hit = Some(FoundNode::ObjectLit(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_array_lit(&mut self, node: &ArrayLit) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::ArrayLit {
            self.hit = Some(FoundNode::ArrayLit(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_key_value_prop(&mut self, node: &KeyValueProp) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::KeyValueProp {
            self.hit = Some(FoundNode::KeyValueProp(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_method_prop(&mut self, node: &MethodProp) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::MethodProp {
            self.hit = Some(FoundNode::MethodProp(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::BlockStmt {
            self.hit = Some(FoundNode::BlockStmt(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_return_stmt(&mut self, node: &ReturnStmt) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::ReturnStmt {
            self.hit = Some(FoundNode::ReturnStmt(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        if self.hit.is_some() {
            return;
        }
        if self.kind == NodeKind::ImportDecl {
            self.hit = Some(FoundNode::ImportDecl(node.clone()));
            return;
        }
        node.visit_children_with(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ScriptAst, ScriptLang};

    fn parse(source: &str) -> ScriptAst {
        ScriptAst::parse(source, ScriptLang::Ts).unwrap()
    }

    #[test]
    fn finds_first_call_expression() {
        let ast = parse("const a = outer(inner());");
        let found = find_first(ast.module(), NodeKind::CallExpr).unwrap();
        let FoundNode::CallExpr(call) = found else {
            panic!("expected a call expression");
        };
        assert_eq!(ast.snippet(call.span), "outer(inner())");
    }

    #[test]
    fn finds_object_literal_inside_call() {
        let ast = parse("register({ a: 1, b: { c: 2 } });");
        let found = find_first(ast.module(), NodeKind::ObjectLit).unwrap();
        let FoundNode::ObjectLit(obj) = found else {
            panic!("expected an object literal");
        };
        assert_eq!(obj.props.len(), 2);
    }

    #[test]
    fn absence_is_none() {
        let ast = parse("const a = 1;");
        assert!(find_first(ast.module(), NodeKind::CallExpr).is_none());
        assert!(find_first(ast.module(), NodeKind::ImportDecl).is_none());
    }

    #[test]
    fn root_itself_can_match() {
        let ast = parse("f();");
        let FoundNode::CallExpr(call) = find_first(ast.module(), NodeKind::CallExpr).unwrap()
        else {
            panic!("expected a call expression");
        };
        // Searching within the found call must return the call itself first.
        let FoundNode::CallExpr(again) = find_first(&call, NodeKind::CallExpr).unwrap() else {
            panic!("expected a call expression");
        };
        assert_eq!(ast.snippet(again.span), "f()");
    }

    #[test]
    fn finds_method_member() {
        let ast = parse("define({ setup() { return {}; } });");
        let found = find_first(ast.module(), NodeKind::MethodProp).unwrap();
        assert_eq!(found.kind(), NodeKind::MethodProp);
    }

    #[test]
    fn finds_import_declaration() {
        let ast = parse("import { ref } from 'vue';\nconst a = ref(0);");
        let FoundNode::ImportDecl(import) = find_first(ast.module(), NodeKind::ImportDecl).unwrap()
        else {
            panic!("expected an import declaration");
        };
        assert_eq!(ast.snippet(import.span), "import { ref } from 'vue';");
    }

    #[test]
    fn pre_order_is_source_order() {
        let ast = parse("first(); second();");
        let FoundNode::CallExpr(call) = find_first(ast.module(), NodeKind::CallExpr).unwrap()
        else {
            panic!("expected a call expression");
        };
        assert_eq!(ast.snippet(call.span), "first()");
    }
}
