//! Component assembly.
//!
//! Glues a controller, a template and pass-through framework options into
//! the final component descriptor. The controller-alias name and the scope
//! root are derived from the template's own first two parameter names; the
//! template itself is replaced by a memoized zero-argument accessor that
//! compiles and serializes on first use.

use crate::dom::Dom;
use crate::{compile_with_options, Compiled, Template};
use njx_ast::{CompileError, CompilerOptions, String};
use once_cell::unsync::OnceCell;
use std::cell::RefCell;

/// Marker attribute: a single root element carrying it emits only its inner
/// markup.
pub const UNWRAP_ATTR: &str = "jsx-unwrap";

/// Input to [`component`]: the controller's registered name, the template
/// and any framework component options passed through untouched.
pub struct ComponentOptions {
    pub controller: String,
    pub template: Template,
    pub options: serde_json::Map<std::string::String, serde_json::Value>,
}

/// The assembled component descriptor.
///
/// The template accessor is memoized: the compiling closure runs at most
/// once, and every later access returns the first computed string. A failed
/// compile caches nothing, so a later access retries. This type is
/// single-threaded by design; calling [`ComponentDescriptor::template`]
/// re-entrantly from inside the template body is not supported.
pub struct ComponentDescriptor {
    dom: Box<dyn Dom>,
    controller: String,
    controller_as: String,
    scope_root: String,
    template_fn: RefCell<Option<Template>>,
    html: OnceCell<std::string::String>,
    options: serde_json::Map<std::string::String, serde_json::Value>,
}

/// Assemble a component descriptor.
///
/// The first template parameter names the controller alias; the second (if
/// present) names the scope root, defaulting to `$`.
pub fn component(
    dom: Box<dyn Dom>,
    options: ComponentOptions,
) -> Result<ComponentDescriptor, CompileError> {
    let names = njx_parse::param_names(options.template.signature())?;
    let controller_as = names
        .first()
        .cloned()
        .ok_or_else(|| CompileError::Parse("template declares no controller parameter".into()))?;
    let scope_root = names.get(1).cloned().unwrap_or_else(|| "$".into());

    Ok(ComponentDescriptor {
        dom,
        controller: options.controller,
        controller_as,
        scope_root,
        template_fn: RefCell::new(Some(options.template)),
        html: OnceCell::new(),
        options: options.options,
    })
}

impl ComponentDescriptor {
    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn controller_as(&self) -> &str {
        &self.controller_as
    }

    pub fn scope_root(&self) -> &str {
        &self.scope_root
    }

    pub fn options(&self) -> &serde_json::Map<std::string::String, serde_json::Value> {
        &self.options
    }

    /// The rendered template string, compiled on first access.
    ///
    /// After the first successful compile the stored template closure is
    /// dropped so anything it captured can be reclaimed.
    pub fn template(&self) -> Result<&str, CompileError> {
        let html = self.html.get_or_try_init(|| {
            let guard = self.template_fn.borrow();
            let template = guard.as_ref().ok_or_else(|| {
                CompileError::TemplateExecution("template function already released".into())
            })?;
            render_template(self.dom.as_ref(), template, &self.scope_root)
        })?;
        self.template_fn.borrow_mut().take();
        Ok(html)
    }

    /// The descriptor as the JSON object the host framework's component
    /// registration consumes (forces template compilation).
    pub fn to_json(&self) -> Result<serde_json::Value, CompileError> {
        let template = self.template()?.to_string();
        let mut map = self.options.clone();
        map.insert(
            "controller".to_string(),
            serde_json::Value::String(self.controller.to_string()),
        );
        map.insert(
            "controllerAs".to_string(),
            serde_json::Value::String(self.controller_as.to_string()),
        );
        map.insert("template".to_string(), serde_json::Value::String(template));
        Ok(serde_json::Value::Object(map))
    }
}

/// Compile a template and serialize it to markup.
///
/// A fragment joins each node's outer markup with a newline; a single node
/// carrying [`UNWRAP_ATTR`] emits only its inner markup, any other single
/// node emits its outer markup.
pub fn render_template(
    dom: &dyn Dom,
    template: &Template,
    scope_root: &str,
) -> Result<std::string::String, CompileError> {
    let compiled = compile_with_options(
        dom,
        template,
        &CompilerOptions::with_scope_root(scope_root),
    )?;
    Ok(match &compiled {
        Compiled::Fragment(nodes) => {
            let parts: Vec<std::string::String> =
                nodes.iter().map(|node| dom.outer_html(node)).collect();
            parts.join("\n")
        }
        Compiled::Single(node) => {
            if dom.has_attribute(node, UNWRAP_ATTR) {
                dom.inner_html(node)
            } else {
                dom.outer_html(node)
            }
        }
    })
}
