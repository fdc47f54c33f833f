//! Template compilation for njx.
//!
//! This crate orchestrates the whole transform: it extracts the template
//! function's declared parameter names, substitutes one tracking value per
//! parameter, runs the template body to build a DOM-like tree (now carrying
//! rendered framework expressions wherever the body touched a tracker) and
//! serializes that tree to the HTML string the host framework consumes.
//!
//! Modules:
//! - [`dom`] — the injected DOM collaborator and its default tree
//!   implementation
//! - [`element`] — the element builder (attribute/child rendering rules)
//! - [`repeat`] — `ng-repeat` construction
//! - [`component`] — component descriptor assembly with a memoized template
//!   accessor

pub mod component;
pub mod dom;
pub mod element;
pub mod repeat;

pub use component::{component, render_template, ComponentDescriptor, ComponentOptions};
pub use dom::{Dom, TreeDom};
pub use element::create_element;
pub use repeat::{ng_repeat, ng_repeat_entries};

use njx_ast::{CompileError, CompilerOptions, ElementNode, Param, Tracker, Value};
use njx_parse::parse_params;
use std::fmt;

/// The explicit form of an authored template function: the literal
/// parameter-list text plus the body as a closure.
///
/// The body receives the injected DOM collaborator and one [`Value`] per
/// declared parameter (tracking values substituted for real data) and
/// returns whatever tree it builds. Bodies signal their own failures with
/// [`CompileError::TemplateExecution`]; such errors propagate to the caller
/// unmodified.
pub struct Template {
    signature: njx_ast::String,
    body: TemplateBody,
}

type TemplateBody = Box<dyn Fn(&dyn Dom, &[Value]) -> Result<Compiled, CompileError>>;

impl Template {
    pub fn new(
        signature: impl Into<njx_ast::String>,
        body: impl Fn(&dyn Dom, &[Value]) -> Result<Compiled, CompileError> + 'static,
    ) -> Self {
        Self {
            signature: signature.into(),
            body: Box::new(body),
        }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A compiled template: a single root element or a fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Compiled {
    Single(ElementNode),
    Fragment(Vec<ElementNode>),
}

impl Compiled {
    pub fn into_single(self) -> Option<ElementNode> {
        match self {
            Compiled::Single(el) => Some(el),
            Compiled::Fragment(_) => None,
        }
    }
}

impl From<ElementNode> for Compiled {
    fn from(el: ElementNode) -> Self {
        Compiled::Single(el)
    }
}

impl From<Vec<ElementNode>> for Compiled {
    fn from(els: Vec<ElementNode>) -> Self {
        Compiled::Fragment(els)
    }
}

/// Compile a template with default options (scope root `$`).
pub fn compile(dom: &dyn Dom, template: &Template) -> Result<Compiled, CompileError> {
    compile_with_options(dom, template, &CompilerOptions::default())
}

/// Compile a template with custom options.
///
/// Each simple parameter becomes a tracking value rooted at its own name. A
/// destructured parameter becomes an object whose fields are tracking
/// values, each rooted at the field's own name (not nested under the
/// parent), matching how the host framework scopes `$index` and friends.
pub fn compile_with_options(
    dom: &dyn Dom,
    template: &Template,
    options: &CompilerOptions,
) -> Result<Compiled, CompileError> {
    let params = parse_params(template.signature())?;
    let args: Vec<Value> = params
        .iter()
        .map(|param| match param {
            Param::Name(name) => {
                Value::Tracker(Tracker::root(name.clone(), options.scope_root.clone()))
            }
            Param::Destructured(fields) => Value::Object(
                fields
                    .iter()
                    .map(|field| {
                        (
                            field.clone(),
                            Value::Tracker(Tracker::root(
                                field.clone(),
                                options.scope_root.clone(),
                            )),
                        )
                    })
                    .collect(),
            ),
        })
        .collect();
    (template.body)(dom, &args)
}
