//! The DOM collaborator.
//!
//! The compiler only needs a narrow slice of DOM behavior: element creation,
//! attribute setting, child appending and HTML serialization. That contract
//! is a trait injected explicitly into the element builder, repeat
//! constructor and component assembler — never ambient state — so hosts can
//! substitute their own implementation.

use njx_ast::{Child, ElementNode};

/// The narrow DOM contract the compiler depends on.
pub trait Dom {
    fn create_element(&self, tag: &str) -> ElementNode {
        ElementNode::new(tag)
    }

    fn set_attribute(&self, el: &mut ElementNode, name: &str, value: &str) {
        el.set_attribute(name, value);
    }

    fn append_text(&self, el: &mut ElementNode, text: &str) {
        el.append_text(text);
    }

    fn append_element(&self, el: &mut ElementNode, child: ElementNode) {
        el.append_element(child);
    }

    fn has_attribute(&self, el: &ElementNode, name: &str) -> bool {
        el.has_attribute(name)
    }

    /// Serialize the element including its own tag.
    fn outer_html(&self, el: &ElementNode) -> String;

    /// Serialize only the element's children.
    fn inner_html(&self, el: &ElementNode) -> String;
}

/// Default DOM implementation over the owned element tree.
///
/// Serialization matches what a browser's `outerHTML` produces for these
/// trees: void tags emit no end tag, text escapes `& < >` and attribute
/// values additionally escape `"`. Interpolation braces pass through
/// untouched, which the host framework's template parser relies on.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeDom;

impl Dom for TreeDom {
    fn outer_html(&self, el: &ElementNode) -> String {
        let mut out = String::new();
        write_element(el, &mut out);
        out
    }

    fn inner_html(&self, el: &ElementNode) -> String {
        let mut out = String::new();
        write_children(el, &mut out);
        out
    }
}

fn write_element(el: &ElementNode, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_html_attr(value));
        out.push('"');
    }
    out.push('>');
    if is_void_tag(&el.tag) {
        return;
    }
    write_children(el, out);
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_children(el: &ElementNode, out: &mut String) {
    for child in &el.children {
        match child {
            Child::Text(text) => out.push_str(&escape_html(text)),
            Child::Element(child) => write_element(child, out),
        }
    }
}

/// HTML void tags: no children, no end tag.
pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_html_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("{{ctrl.name}}"), "{{ctrl.name}}");
    }

    #[test]
    fn test_escape_html_attr() {
        assert_eq!(escape_html_attr("hello\"world"), "hello&quot;world");
        assert_eq!(escape_html_attr("item in ctrl.arr"), "item in ctrl.arr");
    }

    #[test]
    fn test_outer_html() {
        let dom = TreeDom;
        let mut el = ElementNode::new("div");
        el.set_attribute("class", "a");
        el.append_text("hi");
        let mut inner = ElementNode::new("span");
        inner.append_text("x");
        el.append_element(inner);

        assert_eq!(dom.outer_html(&el), "<div class=\"a\">hi<span>x</span></div>");
        assert_eq!(dom.inner_html(&el), "hi<span>x</span>");
    }

    #[test]
    fn test_void_tag_has_no_end_tag() {
        let dom = TreeDom;
        let mut el = ElementNode::new("img");
        el.set_attribute("src", "a.png");
        assert_eq!(dom.outer_html(&el), "<img src=\"a.png\">");
    }
}
