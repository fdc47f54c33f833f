//! `ng-repeat` construction.
//!
//! Builds a single repeated element annotated with the host framework's
//! iteration directive. The iteration variable is inferred from the repeat
//! callback's own parameter names; names starting with the reserved `$`
//! prefix belong to the framework's repeat scope (`$index`, `$first`,
//! `$middle`, `$last`, `$even`, `$odd`) and are skipped. Those parameters
//! still receive tracking values, so `{$index}` interpolates as `{{$index}}`
//! inside the repeated template.

use crate::dom::Dom;
use crate::{compile, Compiled, Template};
use njx_ast::{CompileError, ElementNode, Value};

/// The host framework's iteration directive attribute.
pub const REPEAT_ATTR: &str = "ng-repeat";

/// Prefix of names reserved for the framework's repeat scope.
const RESERVED_PREFIX: char = '$';

/// Repeat over an array: `ng-repeat="<item> in <itemsExpr>"`.
///
/// `items` stringifies per value rules: a tracking value renders as its
/// path, a literal list renders comma-joined.
pub fn ng_repeat(
    dom: &dyn Dom,
    items: &Value,
    template: &Template,
) -> Result<ElementNode, CompileError> {
    let names = njx_parse::param_names(template.signature())?;
    let item = names
        .iter()
        .find(|name| !name.starts_with(RESERVED_PREFIX))
        .ok_or_else(|| {
            CompileError::InvalidRepeatSignature(
                "repeat callback declares no iteration variable".into(),
            )
        })?;

    let mut el = single_root(compile(dom, template)?)?;
    dom.set_attribute(
        &mut el,
        REPEAT_ATTR,
        &format!("{item} in {}", items.render_text()),
    );
    Ok(el)
}

/// Repeat over a keyed object: `ng-repeat="(<key>, <value>) in <itemsExpr>"`.
///
/// Requires exactly two non-reserved parameter names, `(key, value)`.
pub fn ng_repeat_entries(
    dom: &dyn Dom,
    items: &Value,
    template: &Template,
) -> Result<ElementNode, CompileError> {
    let names = njx_parse::param_names(template.signature())?;
    let mut plain = names
        .iter()
        .filter(|name| !name.starts_with(RESERVED_PREFIX));
    let (key, value) = match (plain.next(), plain.next()) {
        (Some(key), Some(value)) => (key, value),
        _ => {
            return Err(CompileError::InvalidRepeatSignature(
                "keyed repeat callback must declare (key, value) parameters".into(),
            ))
        }
    };

    let mut el = single_root(compile(dom, template)?)?;
    dom.set_attribute(
        &mut el,
        REPEAT_ATTR,
        &format!("({key}, {value}) in {}", items.render_text()),
    );
    Ok(el)
}

fn single_root(compiled: Compiled) -> Result<ElementNode, CompileError> {
    compiled.into_single().ok_or_else(|| {
        CompileError::TemplateExecution("repeat template must produce a single element".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_element, Dom, TreeDom};
    use njx_ast::Tracker;

    fn item_template() -> Template {
        Template::new("(item, { $index })", |dom, args| {
            let index = args[1].get("$index")?;
            let item = args[0].clone();
            Ok(create_element(
                dom,
                "div",
                &[("class", Value::from("repeated"))],
                &[index, Value::from(": "), item],
            )
            .into())
        })
    }

    #[test]
    fn test_repeat_over_literal_items() {
        let dom = TreeDom;
        let items = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        let el = ng_repeat(&dom, &items, &item_template()).unwrap();
        assert_eq!(el.get_attribute("ng-repeat"), Some("item in 1,2,3"));
    }

    #[test]
    fn test_repeat_over_tracked_collection() {
        let dom = TreeDom;
        let arr = Value::Tracker(Tracker::root("ctrl", "$").get("arr").unwrap());
        let el = ng_repeat(&dom, &arr, &item_template()).unwrap();

        assert_eq!(el.get_attribute("ng-repeat"), Some("item in ctrl.arr"));
        assert_eq!(dom.inner_html(&el), "{{$index}}: {{item}}");
        assert_eq!(el.get_attribute("class"), Some("repeated"));
    }

    #[test]
    fn test_reserved_names_are_skipped() {
        let dom = TreeDom;
        let template = Template::new("($index, deez)", |dom, args| {
            Ok(create_element(dom, "li", &[], &[args[1].clone()]).into())
        });
        let arr = Value::Tracker(Tracker::root("ctrl", "$").get("arr").unwrap());

        let el = ng_repeat(&dom, &arr, &template).unwrap();
        assert_eq!(el.get_attribute("ng-repeat"), Some("deez in ctrl.arr"));
    }

    #[test]
    fn test_missing_iteration_variable() {
        let dom = TreeDom;
        let template = Template::new("({ $index, $odd })", |dom, _| {
            Ok(create_element(dom, "li", &[], &[]).into())
        });
        let items = Value::List(vec![]);

        assert!(matches!(
            ng_repeat(&dom, &items, &template),
            Err(CompileError::InvalidRepeatSignature(_))
        ));
    }

    #[test]
    fn test_keyed_repeat() {
        let dom = TreeDom;
        let template = Template::new("(key, value, { $index })", |dom, args| {
            Ok(create_element(
                dom,
                "div",
                &[],
                &[args[0].clone(), Value::from("="), args[1].clone()],
            )
            .into())
        });
        let obj = Value::Tracker(Tracker::root("ctrl", "$").get("lookup").unwrap());

        let el = ng_repeat_entries(&dom, &obj, &template).unwrap();
        assert_eq!(
            el.get_attribute("ng-repeat"),
            Some("(key, value) in ctrl.lookup")
        );
        assert_eq!(dom.inner_html(&el), "{{key}}={{value}}");
    }

    #[test]
    fn test_keyed_repeat_needs_two_names() {
        let dom = TreeDom;
        let template = Template::new("(key)", |dom, _| {
            Ok(create_element(dom, "div", &[], &[]).into())
        });

        assert!(matches!(
            ng_repeat_entries(&dom, &Value::List(vec![]), &template),
            Err(CompileError::InvalidRepeatSignature(_))
        ));
    }

    #[test]
    fn test_fragment_repeat_template_is_rejected() {
        let dom = TreeDom;
        let template = Template::new("(item)", |_, _| Ok(Compiled::Fragment(Vec::new())));

        assert!(matches!(
            ng_repeat(&dom, &Value::List(vec![]), &template),
            Err(CompileError::TemplateExecution(_))
        ));
    }
}
