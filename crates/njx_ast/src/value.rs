//! The tagged value model for JSX expression positions.
//!
//! In the original JSX layer any JavaScript value could flow into an
//! attribute or child position. Here that universe is an explicit variant:
//! literals, tracking values, inline expression bodies, objects, lists and
//! nested elements. The element builder decides how each variant renders in
//! attribute position versus child position.

use crate::{CompileError, ElementNode, String, Tracker};

/// A value occupying a JSX expression position.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A tracking value recording an access path
    Tracker(Tracker),
    /// An inline expression body, e.g. `$ctrl.submit()` — the explicit form
    /// of the arrow functions the JSX layer stringified
    Func(String),
    /// An ordered key/value mapping (`style` objects and generic objects)
    Object(Vec<(String, Value)>),
    List(Vec<Value>),
    Element(ElementNode),
}

impl Value {
    /// Property access that works like the tracked parameter did in JSX:
    /// trackers extend their access path, destructured-parameter objects
    /// look up the field.
    pub fn get(&self, key: &str) -> Result<Value, CompileError> {
        match self {
            Value::Tracker(tracker) => Ok(Value::Tracker(tracker.get(key)?)),
            Value::Object(fields) => fields
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| CompileError::UnsupportedKey(key.into())),
            _ => Err(CompileError::UnsupportedKey(key.into())),
        }
    }

    /// Index access; trackers extend their path, lists index their items.
    pub fn at(&self, index: usize) -> Result<Value, CompileError> {
        match self {
            Value::Tracker(tracker) => Ok(Value::Tracker(tracker.at(index))),
            Value::List(items) => items
                .get(index)
                .cloned()
                .ok_or_else(|| CompileError::UnsupportedKey(index.to_string().into())),
            _ => Err(CompileError::UnsupportedKey(index.to_string().into())),
        }
    }

    pub fn is_tracker(&self) -> bool {
        matches!(self, Value::Tracker(_))
    }

    /// Plain textual rendering, used for object members, list joins and
    /// repeat collection expressions. Strings are NOT quoted here; trackers
    /// render as their bare path.
    pub fn render_text(&self) -> String {
        match self {
            Value::Null => "null".into(),
            Value::Bool(true) => "true".into(),
            Value::Bool(false) => "false".into(),
            Value::Int(n) => n.to_string().into(),
            Value::Float(n) => n.to_string().into(),
            Value::Str(s) => s.clone(),
            Value::Tracker(tracker) => tracker.path_expr(),
            Value::Func(body) => body.clone(),
            Value::Object(fields) => {
                let members: Vec<std::string::String> = fields
                    .iter()
                    .map(|(k, v)| format!("{k}:{}", v.render_text()))
                    .collect();
                format!("{{{}}}", members.join(",")).into()
            }
            Value::List(items) => {
                let members: Vec<std::string::String> = items
                    .iter()
                    .map(|item| item.render_text().to_string())
                    .collect();
                members.join(",").into()
            }
            // Elements have no textual form; they append structurally
            Value::Element(_) => "".into(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<std::string::String> for Value {
    fn from(s: std::string::String) -> Self {
        Value::Str(s.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Tracker> for Value {
    fn from(tracker: Tracker) -> Self {
        Value::Tracker(tracker)
    }
}

impl From<ElementNode> for Value {
    fn from(el: ElementNode) -> Self {
        Value::Element(el)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// A declared template-function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A simple named parameter
    Name(String),
    /// A one-level object destructuring pattern; each field later receives
    /// its own tracking value rooted at the field's own name
    Destructured(Vec<String>),
}

impl Param {
    /// Flatten to the declared names, destructured fields in order.
    pub fn names(&self) -> Vec<String> {
        match self {
            Param::Name(name) => vec![name.clone()],
            Param::Destructured(fields) => fields.clone(),
        }
    }
}
