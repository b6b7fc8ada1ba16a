//! Props extraction: classifies the `props` member of the configuration
//! object and emits the equivalent top-level `defineProps` declaration.

use crate::error::{ConvertError, ConvertResult};
use script_query::{find_first, FoundNode, NodeKind, ScriptAst};
use swc_common::Spanned;
use swc_ecma_ast::{CallExpr, Expr, KeyValueProp, Lit, ObjectLit, Prop, PropName, PropOrSpread};

/// Output style for the generated props declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropsStyle {
    /// `defineProps({ ... })` with the original member text kept verbatim.
    #[default]
    Runtime,
    /// `defineProps<{ ... }>()` with types derived per prop, wrapped in
    /// `withDefaults` when default values are present.
    TypeBased,
}

/// The classified shape of a `props` member. Classification is total: every
/// legal value maps to exactly one variant, and unrecognized shapes fail
/// with [`ConvertError::UnsupportedPropsShape`] instead of producing empty
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropsSpec {
    /// `props: ['modelValue', 'title']`: names only, no metadata.
    ArrayShorthand { names: Vec<String> },
    /// `props: MyProps`: a reference to an externally defined type.
    TypeOnly { type_name: String },
    /// `props: { ... }`: per-prop descriptors.
    Object { props: Vec<PropEntry> },
}

/// One prop inside an object-shaped `props` member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropEntry {
    pub name: String,
    pub spec: PropSpec,
}

/// The classified shape of a single prop's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropSpec {
    /// `foo: String`: a constructor or type identifier only.
    TypeOnly { type_value: String },
    /// `foo: { type, required, default }`: an options object.
    Options(PropOptions),
}

/// Options extracted by name lookup from a per-prop options object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropOptions {
    /// The `type` option's text, e.g. `String` or `String as PropType<T>`.
    pub type_value: Option<String>,
    /// The `required` option. A boolean literal yields its value; any other
    /// present value yields `true`.
    pub required: Option<bool>,
    /// The `default` option's value: literal text without quote syntax for
    /// string and number literals, exact source text otherwise.
    pub default_value: Option<String>,
    /// The `default` option's exact source text, quotes included. Used when
    /// re-emitting the default into generated code.
    pub default_source: Option<String>,
}

/// Convert the `props` member of the definition call into a top-level
/// `const props = defineProps...` statement.
pub fn convert_props(call: &CallExpr, ast: &ScriptAst, style: PropsStyle) -> ConvertResult<String> {
    let config = config_object(call)?;
    let props = props_member(&config).ok_or(ConvertError::PropsNotFound)?;

    match props.value.as_ref() {
        // `props: MyProps` forwards the identifier as a type annotation in
        // both styles; a runtime forward would change its meaning.
        Expr::Ident(ident) => Ok(format!("const props = defineProps<{}>();", ident.sym)),
        Expr::Object(obj) => match style {
            PropsStyle::Runtime => Ok(emit_runtime(obj, ast)),
            PropsStyle::TypeBased => {
                let entries = classify_object(obj, ast)?;
                Ok(emit_type_based(&entries))
            }
        },
        Expr::Array(arr) => match style {
            // A verbatim forward is still legal Vue, so nothing is dropped.
            PropsStyle::Runtime => Ok(format!(
                "const props = defineProps({});",
                ast.snippet(arr.span)
            )),
            PropsStyle::TypeBased => Err(ConvertError::UnsupportedPropsShape(
                "array shorthand props have no type-based form".to_string(),
            )),
        },
        other => Err(ConvertError::UnsupportedPropsShape(format!(
            "props value `{}` is neither an identifier, object nor array",
            ast.snippet(other.span())
        ))),
    }
}

/// Classify a `props` member's value without emitting code.
pub fn classify_props(value: &Expr, ast: &ScriptAst) -> ConvertResult<PropsSpec> {
    match value {
        Expr::Ident(ident) => Ok(PropsSpec::TypeOnly {
            type_name: ident.sym.to_string(),
        }),
        Expr::Array(arr) => {
            let mut names = Vec::new();
            for elem in arr.elems.iter().flatten() {
                match elem.expr.as_ref() {
                    Expr::Lit(Lit::Str(s)) => names.push(s.value.to_string_lossy().into_owned()),
                    other => names.push(ast.snippet(other.span())),
                }
            }
            Ok(PropsSpec::ArrayShorthand { names })
        }
        Expr::Object(obj) => Ok(PropsSpec::Object {
            props: classify_object(obj, ast)?,
        }),
        other => Err(ConvertError::UnsupportedPropsShape(format!(
            "props value `{}` is neither an identifier, object nor array",
            ast.snippet(other.span())
        ))),
    }
}

/// The configuration object: the first object literal inside the call.
fn config_object(call: &CallExpr) -> ConvertResult<ObjectLit> {
    match find_first(call, NodeKind::ObjectLit) {
        Some(FoundNode::ObjectLit(obj)) => Ok(obj),
        _ => Err(ConvertError::PropsNotFound),
    }
}

/// The `props` member among the configuration object's direct properties.
/// Only plain property assignments are considered; computed and spread
/// members are treated as absent.
fn props_member(config: &ObjectLit) -> Option<KeyValueProp> {
    direct_member(config, "props")
}

fn direct_member(obj: &ObjectLit, name: &str) -> Option<KeyValueProp> {
    obj.props.iter().find_map(|member| match member {
        PropOrSpread::Prop(prop) => match prop.as_ref() {
            Prop::KeyValue(kv) if prop_key_name(&kv.key).as_deref() == Some(name) => {
                Some(kv.clone())
            }
            _ => None,
        },
        PropOrSpread::Spread(_) => None,
    })
}

fn prop_key_name(key: &PropName) -> Option<String> {
    match key {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => Some(s.value.to_string_lossy().into_owned()),
        // Numeric, bigint and computed keys never name an option.
        _ => None,
    }
}

/// Wrap the object members verbatim into a `defineProps({...})` call.
fn emit_runtime(obj: &ObjectLit, ast: &ScriptAst) -> String {
    let members: Vec<String> = obj
        .props
        .iter()
        .map(|member| ast.snippet(member.span()))
        .collect();
    format!("const props = defineProps({{ {} }});", members.join(", "))
}

/// Classify each member of an object-shaped `props` value.
fn classify_object(obj: &ObjectLit, ast: &ScriptAst) -> ConvertResult<Vec<PropEntry>> {
    let mut entries = Vec::new();

    for member in &obj.props {
        let kv = match member {
            PropOrSpread::Prop(prop) => match prop.as_ref() {
                Prop::KeyValue(kv) => kv.clone(),
                other => {
                    return Err(ConvertError::UnsupportedPropsShape(format!(
                        "prop member `{}` is not a property assignment",
                        ast.snippet(other.span())
                    )))
                }
            },
            PropOrSpread::Spread(spread) => {
                return Err(ConvertError::UnsupportedPropsShape(format!(
                    "spread member `{}` cannot be classified",
                    ast.snippet(spread.expr.span())
                )))
            }
        };

        let name = prop_key_name(&kv.key).ok_or_else(|| {
            ConvertError::UnsupportedPropsShape(format!(
                "prop key `{}` is not a plain name",
                ast.snippet(kv.key.span())
            ))
        })?;

        let spec = match kv.value.as_ref() {
            Expr::Ident(ident) => PropSpec::TypeOnly {
                type_value: ident.sym.to_string(),
            },
            Expr::Object(options) => PropSpec::Options(extract_options(options, ast)),
            other => {
                return Err(ConvertError::UnsupportedPropsShape(format!(
                    "prop `{}` has unsupported value `{}`",
                    name,
                    ast.snippet(other.span())
                )))
            }
        };

        entries.push(PropEntry { name, spec });
    }

    Ok(entries)
}

/// Extract `type`, `required` and `default` from a per-prop options object.
fn extract_options(options: &ObjectLit, ast: &ScriptAst) -> PropOptions {
    let type_value = match prop_option(options, "type", ast) {
        Some(OptionValue::Text(text)) => Some(text),
        Some(OptionValue::Bool(value)) => Some(value.to_string()),
        None => None,
    };

    let required = match prop_option(options, "required", ast) {
        Some(OptionValue::Bool(value)) => Some(value),
        // A present non-boolean value is treated as "required".
        Some(OptionValue::Text(_)) => Some(true),
        None => None,
    };

    let default_value = match prop_option(options, "default", ast) {
        Some(OptionValue::Text(text)) => Some(text),
        Some(OptionValue::Bool(value)) => Some(value.to_string()),
        None => None,
    };

    let default_source = direct_member(options, "default").map(|kv| ast.snippet(kv.value.span()));

    PropOptions {
        type_value,
        required,
        default_value,
        default_source,
    }
}

/// The value of a per-prop option.
enum OptionValue {
    Bool(bool),
    Text(String),
}

/// Look up an option by name and extract its value:
/// an identifier yields its text, a boolean literal its value, a string or
/// number literal its value without quote syntax, and any other expression
/// its exact source text.
fn prop_option(options: &ObjectLit, name: &str, ast: &ScriptAst) -> Option<OptionValue> {
    let kv = direct_member(options, name)?;
    Some(match kv.value.as_ref() {
        Expr::Ident(ident) => OptionValue::Text(ident.sym.to_string()),
        Expr::Lit(Lit::Bool(b)) => OptionValue::Bool(b.value),
        Expr::Lit(Lit::Str(s)) => OptionValue::Text(s.value.to_string_lossy().into_owned()),
        Expr::Lit(Lit::Num(n)) => OptionValue::Text(match &n.raw {
            Some(raw) => raw.to_string(),
            None => n.value.to_string(),
        }),
        other => OptionValue::Text(ast.snippet(other.span())),
    })
}

/// Emit a type-based declaration from classified prop entries.
fn emit_type_based(entries: &[PropEntry]) -> String {
    let mut fields = Vec::new();
    let mut defaults = Vec::new();

    for entry in entries {
        match &entry.spec {
            PropSpec::TypeOnly { type_value } => {
                // No metadata means the prop is optional.
                fields.push(format!("{}?: {}", entry.name, ts_type(type_value)));
            }
            PropSpec::Options(options) => {
                let ty = options
                    .type_value
                    .as_deref()
                    .map(ts_type)
                    .unwrap_or_else(|| "any".to_string());
                let optional = !matches!(options.required, Some(true));
                let marker = if optional { "?" } else { "" };
                fields.push(format!("{}{}: {}", entry.name, marker, ty));

                if let Some(source) = &options.default_source {
                    defaults.push(format!("{}: {}", entry.name, source));
                }
            }
        }
    }

    let type_body = format!("{{ {} }}", fields.join("; "));
    if defaults.is_empty() {
        format!("const props = defineProps<{}>();", type_body)
    } else {
        format!(
            "const props = withDefaults(defineProps<{}>(), {{ {} }});",
            type_body,
            defaults.join(", ")
        )
    }
}

/// Map a runtime prop type to its TypeScript equivalent. A
/// `PropType<T>` assertion wins over the constructor; unknown names pass
/// through as user-defined types.
fn ts_type(runtime: &str) -> String {
    if let Some(arg) = prop_type_argument(runtime) {
        return arg.to_string();
    }
    match runtime {
        "String" => "string".to_string(),
        "Number" => "number".to_string(),
        "Boolean" => "boolean".to_string(),
        "Array" => "any[]".to_string(),
        "Object" => "Record<string, any>".to_string(),
        "Function" => "(...args: any[]) => any".to_string(),
        "Symbol" => "symbol".to_string(),
        other => other.to_string(),
    }
}

/// Extract `T` from a `... as PropType<T>` annotation.
fn prop_type_argument(text: &str) -> Option<&str> {
    let start = text.find("PropType<")? + "PropType<".len();
    let rest = &text[start..];
    let end = rest.rfind('>')?;
    Some(rest[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::locate_component;
    use pretty_assertions::assert_eq;
    use script_query::ScriptLang;

    fn component(source: &str) -> (CallExpr, ScriptAst) {
        let ast = ScriptAst::parse(source, ScriptLang::Ts).unwrap();
        let call = locate_component(&ast).unwrap();
        (call, ast)
    }

    fn classify(props_source: &str) -> PropsSpec {
        let source = format!("export default defineComponent({{ props: {} }});", props_source);
        let (call, ast) = component(&source);
        let config = config_object(&call).unwrap();
        let member = props_member(&config).unwrap();
        classify_props(&member.value, &ast).unwrap()
    }

    #[test]
    fn runtime_object_is_wrapped_verbatim() {
        let (call, ast) = component(
            "export default defineComponent({ props: { foo: String, bar: { type: Number, required: true } } });",
        );
        let out = convert_props(&call, &ast, PropsStyle::Runtime).unwrap();
        assert_eq!(
            out,
            "const props = defineProps({ foo: String, bar: { type: Number, required: true } });"
        );
    }

    #[test]
    fn identifier_becomes_type_reference() {
        let (call, ast) =
            component("export default defineComponent({ props: MyPropsType, setup() {} });");
        for style in [PropsStyle::Runtime, PropsStyle::TypeBased] {
            let out = convert_props(&call, &ast, style).unwrap();
            assert_eq!(out, "const props = defineProps<MyPropsType>();");
        }
    }

    #[test]
    fn missing_props_member() {
        let (call, ast) = component("export default defineComponent({ setup() {} });");
        assert_eq!(
            convert_props(&call, &ast, PropsStyle::Runtime),
            Err(ConvertError::PropsNotFound)
        );
    }

    #[test]
    fn missing_configuration_object() {
        let (call, ast) = component("export default defineComponent();");
        assert_eq!(
            convert_props(&call, &ast, PropsStyle::Runtime),
            Err(ConvertError::PropsNotFound)
        );
    }

    #[test]
    fn spread_member_is_treated_as_absent() {
        let (call, ast) = component("export default defineComponent({ ...base });");
        assert_eq!(
            convert_props(&call, &ast, PropsStyle::Runtime),
            Err(ConvertError::PropsNotFound)
        );
    }

    #[test]
    fn array_shorthand_passes_through_in_runtime_style() {
        let (call, ast) =
            component("export default defineComponent({ props: ['modelValue', 'title'] });");
        let out = convert_props(&call, &ast, PropsStyle::Runtime).unwrap();
        assert_eq!(out, "const props = defineProps(['modelValue', 'title']);");
    }

    #[test]
    fn array_shorthand_is_unsupported_in_type_based_style() {
        let (call, ast) =
            component("export default defineComponent({ props: ['modelValue'] });");
        assert!(matches!(
            convert_props(&call, &ast, PropsStyle::TypeBased),
            Err(ConvertError::UnsupportedPropsShape(_))
        ));
    }

    #[test]
    fn unrecognized_props_value_is_unsupported() {
        let (call, ast) = component("export default defineComponent({ props: 42 });");
        assert!(matches!(
            convert_props(&call, &ast, PropsStyle::Runtime),
            Err(ConvertError::UnsupportedPropsShape(_))
        ));
    }

    #[test]
    fn classifies_required_and_default_verbatim() {
        let spec = classify("{ count: { type: Number, required: true, default: 0 } }");
        let PropsSpec::Object { props } = spec else {
            panic!("expected an object spec");
        };
        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name, "count");
        let PropSpec::Options(options) = &props[0].spec else {
            panic!("expected an options object");
        };
        assert_eq!(options.type_value.as_deref(), Some("Number"));
        assert_eq!(options.required, Some(true));
        assert_eq!(options.default_value.as_deref(), Some("0"));
    }

    #[test]
    fn classifies_required_false_faithfully() {
        let spec = classify("{ title: { type: String, required: false } }");
        let PropsSpec::Object { props } = spec else {
            panic!("expected an object spec");
        };
        let PropSpec::Options(options) = &props[0].spec else {
            panic!("expected an options object");
        };
        assert_eq!(options.required, Some(false));
    }

    #[test]
    fn string_default_is_unquoted_in_descriptor() {
        let spec = classify("{ title: { type: String, default: 'hello' } }");
        let PropsSpec::Object { props } = spec else {
            panic!("expected an object spec");
        };
        let PropSpec::Options(options) = &props[0].spec else {
            panic!("expected an options object");
        };
        assert_eq!(options.default_value.as_deref(), Some("hello"));
        assert_eq!(options.default_source.as_deref(), Some("'hello'"));
        assert_eq!(options.required, None);
    }

    #[test]
    fn expression_default_keeps_exact_source() {
        let spec = classify("{ items: { type: Array, default: () => [] } }");
        let PropsSpec::Object { props } = spec else {
            panic!("expected an object spec");
        };
        let PropSpec::Options(options) = &props[0].spec else {
            panic!("expected an options object");
        };
        assert_eq!(options.default_value.as_deref(), Some("() => []"));
    }

    #[test]
    fn bare_identifier_prop_is_type_only() {
        let spec = classify("{ label: String }");
        let PropsSpec::Object { props } = spec else {
            panic!("expected an object spec");
        };
        assert_eq!(
            props[0].spec,
            PropSpec::TypeOnly {
                type_value: "String".to_string()
            }
        );
    }

    #[test]
    fn classifies_array_shorthand_names() {
        let spec = classify("['modelValue', 'title']");
        assert_eq!(
            spec,
            PropsSpec::ArrayShorthand {
                names: vec!["modelValue".to_string(), "title".to_string()]
            }
        );
    }

    #[test]
    fn type_based_emission_with_defaults() {
        let (call, ast) = component(
            "export default defineComponent({ props: { msg: { type: String, default: 'hi' }, count: { type: Number, required: true } } });",
        );
        let out = convert_props(&call, &ast, PropsStyle::TypeBased).unwrap();
        assert_eq!(
            out,
            "const props = withDefaults(defineProps<{ msg?: string; count: number }>(), { msg: 'hi' });"
        );
    }

    #[test]
    fn type_based_emission_without_defaults() {
        let (call, ast) = component(
            "export default defineComponent({ props: { label: String, visible: Boolean } });",
        );
        let out = convert_props(&call, &ast, PropsStyle::TypeBased).unwrap();
        assert_eq!(
            out,
            "const props = defineProps<{ label?: string; visible?: boolean }>();"
        );
    }

    #[test]
    fn prop_type_assertion_wins_over_constructor() {
        let (call, ast) = component(
            "export default defineComponent({ props: { currency: { type: String as PropType<Currency>, required: true } } });",
        );
        let out = convert_props(&call, &ast, PropsStyle::TypeBased).unwrap();
        assert_eq!(out, "const props = defineProps<{ currency: Currency }>();");
    }

    #[test]
    fn string_key_names_the_member() {
        let (call, ast) =
            component("export default defineComponent({ 'props': { foo: String } });");
        let out = convert_props(&call, &ast, PropsStyle::Runtime).unwrap();
        assert_eq!(out, "const props = defineProps({ foo: String });");
    }
}
