//! Tracking values and framework expression rendering.
//!
//! A [`Tracker`] is the placeholder a compiled template parameter turns
//! into: every `get`/`at` on it derives a new tracker with a longer access
//! path instead of touching real data. Rendering a tracker produces the
//! host framework's textual expression for that path, relative to the
//! current scope root.
//!
//! The original JSX layer relied on runtime property traps for this; here
//! the same contract is an explicit builder type with `get`/`at`/`call`
//! operations (template bodies are Rust closures, so there is no implicit
//! property access to intercept).

use crate::{AccessPath, CompileError, Segment, String, Value};
use std::fmt;

/// Keys the JSX layer used for string coercion. Accessing these must not
/// extend the recorded path; the tracker keeps rendering its current path.
const REFLECTIVE_KEYS: [&str; 3] = ["valueOf", "toString", "toJSON"];

/// A tracking value: one access path bound to one scope-root name.
///
/// Two trackers are equal iff their access paths and scope roots are
/// structurally equal. Rendering is a pure function of both; trackers carry
/// no other state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tracker {
    path: AccessPath,
    scope_root: String,
}

impl Tracker {
    /// A tracker rooted at a parameter name, rendered relative to
    /// `scope_root`.
    pub fn root(name: impl Into<String>, scope_root: impl Into<String>) -> Self {
        Self {
            path: AccessPath::root(name),
            scope_root: scope_root.into(),
        }
    }

    pub fn path(&self) -> &AccessPath {
        &self.path
    }

    pub fn scope_root(&self) -> &str {
        &self.scope_root
    }

    /// Record a property access, returning the derived tracker.
    ///
    /// Numeric-looking keys become index segments. The reflective keys
    /// `valueOf`/`toString`/`toJSON` return the tracker unchanged. Keys that
    /// could never appear in a rendered expression (empty, whitespace,
    /// quoting or bracket characters) fail with
    /// [`CompileError::UnsupportedKey`].
    pub fn get(&self, key: &str) -> Result<Tracker, CompileError> {
        if REFLECTIVE_KEYS.contains(&key) {
            return Ok(self.clone());
        }
        if !is_expression_key(key) {
            return Err(CompileError::UnsupportedKey(key.into()));
        }
        Ok(self.derive(Segment::from_key(key)))
    }

    /// Record an array-index access.
    pub fn at(&self, index: usize) -> Tracker {
        self.derive(Segment::Index(index))
    }

    fn derive(&self, segment: Segment) -> Tracker {
        Tracker {
            path: self.path.child(segment),
            scope_root: self.scope_root.clone(),
        }
    }

    /// Render the access path, omitting the leading segment when it equals
    /// the scope root: `ctrl.items[2].name`, `myScopedVar`.
    pub fn path_expr(&self) -> String {
        render_path(&self.path, &self.scope_root)
    }

    /// Render an invocation of this tracker.
    ///
    /// The tracker whose path is exactly the scope root is the interpolation
    /// helper: calling it renders `{{arg0|arg1|...}}` (arguments joined raw,
    /// the way the framework's filter syntax reads). Any other tracker
    /// renders a framework call expression `path(arg0,arg1,...)`.
    pub fn call(&self, args: &[Value]) -> String {
        if self.path.is_single_root(&self.scope_root) {
            let mut parts = args.iter().map(Value::render_text);
            let expr: std::string::String = match parts.next() {
                Some(first) => parts.fold(first.to_string(), |acc, p| acc + "|" + p.as_str()),
                None => std::string::String::new(),
            };
            return format!("{{{{{expr}}}}}").into();
        }
        let rendered: Vec<std::string::String> = args
            .iter()
            .map(|arg| arg.render_text().to_string())
            .collect();
        format!("{}({})", self.path_expr(), rendered.join(",")).into()
    }
}

/// Trackers coerce to their rendered path, so they can be embedded in
/// formatted strings the way the JSX layer embedded proxies in template
/// literals.
impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_expr())
    }
}

/// Render an access path relative to a scope root.
///
/// The leading segment is dropped when it names the scope root. Name
/// segments join with `.`, index segments render as `[n]`; the first
/// rendered segment has no separator.
pub fn render_path(path: &AccessPath, scope_root: &str) -> String {
    let segments = path.segments();
    let segments = match segments.first() {
        Some(Segment::Name(root)) if root == scope_root => &segments[1..],
        _ => segments,
    };

    let mut out = std::string::String::new();
    for (i, segment) in segments.iter().enumerate() {
        match segment {
            Segment::Name(name) => {
                if i > 0 {
                    out.push('.');
                }
                out.push_str(name);
            }
            Segment::Index(index) => {
                if i > 0 {
                    out.push('[');
                    out.push_str(&index.to_string());
                    out.push(']');
                } else {
                    out.push_str(&index.to_string());
                }
            }
        }
    }
    out.into()
}

/// Render an interpolation: `{{expr|filter1|filter2}}`.
///
/// Literal strings are quoted, trackers render as their bare path, inline
/// function values render their body text. Zero filters omit the pipes.
pub fn interpolation(value: &Value, filters: &[&str]) -> String {
    let expr = match value {
        Value::Str(s) => format!("\"{s}\""),
        other => other.render_text().to_string(),
    };
    format!("{{{{{}}}}}", join_filters(&expr, filters)).into()
}

/// Render a bare filter chain: `expr|filter1|filter2`.
pub fn filter_expr(expr: &str, filters: &[&str]) -> String {
    join_filters(expr, filters).into()
}

fn join_filters(expr: &str, filters: &[&str]) -> std::string::String {
    if filters.is_empty() {
        return expr.to_string();
    }
    format!("{expr}|{}", filters.join("|"))
}

/// True if `key` can appear verbatim in a rendered framework expression.
fn is_expression_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
