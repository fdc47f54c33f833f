//! The owned element tree produced by the element builder.
//!
//! This is the DOM-like structure templates compile into before HTML
//! serialization. Attribute values and text children already contain the
//! rendered framework expressions (`{{ctrl.name}}`, `item in ctrl.items`);
//! the tree itself is plain data. Every node is owned exclusively by its
//! parent; there is no sharing and there are no cycles.

use crate::String;
use serde::{Deserialize, Serialize};

/// An element: tag name, ordered attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    pub tag: String,
    /// Attribute name/value pairs in insertion order
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Child>,
}

/// A child of an element: literal text (possibly a rendered expression) or a
/// nested element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Child {
    Text(String),
    Element(ElementNode),
}

impl ElementNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.into();
        } else {
            self.attrs.push((name.into(), value.into()));
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Child::Text(text.into()));
    }

    pub fn append_element(&mut self, child: ElementNode) {
        self.children.push(Child::Element(child));
    }
}
