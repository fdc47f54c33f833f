//! The element builder.
//!
//! Builds one element from a tag name, an attribute mapping and children,
//! rendering each value to the correct textual form. The rendering rules
//! differ between attribute position and child position on purpose:
//! a tracking value in attribute position renders as its bare path
//! (`ng-href="ctrl.url"`), while the same tracker as a child renders
//! wrapped in interpolation braces (`{{ctrl.url}}`). Inline expression
//! bodies behave the same way: literal text as an attribute value,
//! interpolated text as a child.

use crate::dom::Dom;
use njx_ast::{interpolation, ElementNode, Value};

/// Build an element. Attribute order and child order are preserved.
pub fn create_element(
    dom: &dyn Dom,
    tag: &str,
    attrs: &[(&str, Value)],
    children: &[Value],
) -> ElementNode {
    let mut el = dom.create_element(tag);
    for (name, value) in attrs {
        let rendered = render_attr_value(value, name);
        dom.set_attribute(&mut el, name, &rendered);
    }
    for child in children {
        append_child(dom, &mut el, child);
    }
    el
}

/// Render a value in attribute position.
fn render_attr_value(value: &Value, name: &str) -> String {
    match value {
        // Inline expression bodies are literal attribute text
        Value::Func(body) => body.to_string(),
        Value::Object(fields) if name == "style" => {
            let pairs: Vec<String> = fields
                .iter()
                .map(|(key, value)| format!("{}:{}", kebab_case(key), value.render_text()))
                .collect();
            pairs.join(";")
        }
        // Booleans/null are suppressed to an empty value
        Value::Bool(_) | Value::Null => String::new(),
        // Everything else (trackers as bare paths, generic objects as
        // `{k:v}`, lists comma-joined, scalars stringified)
        other => other.render_text().to_string(),
    }
}

fn append_child(dom: &dyn Dom, el: &mut ElementNode, child: &Value) {
    if let Value::List(items) = child {
        // `[tracker, ...filterNames]` is the interpolation shorthand
        if let Some((first, rest)) = items.split_first() {
            if first.is_tracker() && rest.iter().all(|v| matches!(v, Value::Str(_))) {
                let filters: Vec<&str> = rest
                    .iter()
                    .filter_map(|v| match v {
                        Value::Str(s) => Some(s.as_str()),
                        _ => None,
                    })
                    .collect();
                dom.append_text(el, &interpolation(first, &filters));
                return;
            }
        }
        // Any other list flattens one level
        for item in items {
            append_one(dom, el, item);
        }
        return;
    }
    append_one(dom, el, child);
}

fn append_one(dom: &dyn Dom, el: &mut ElementNode, child: &Value) {
    match child {
        Value::Element(node) => dom.append_element(el, node.clone()),
        // Bare trackers and inline expression bodies interpolate in child
        // position
        Value::Tracker(_) | Value::Func(_) => dom.append_text(el, &interpolation(child, &[])),
        Value::Null => {}
        other => dom.append_text(el, &other.render_text()),
    }
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
