//! njx compiles JSX-authored component templates into AngularJS binding
//! templates.
//!
//! A template is written as element-construction calls over placeholder
//! parameters. During compilation each parameter is substituted with a
//! tracking value that records every access taken through it; the element
//! builder renders those recordings as the framework's textual expression
//! syntax (`{{expr}}` interpolation, `ng-repeat` directives, attribute
//! bindings) and the result serializes to the HTML string the framework's
//! template parser consumes.
//!
//! ```
//! use njx::prelude::*;
//! use njx::serde_json;
//!
//! let template = Template::new("(ctrl, $)", |dom, args| {
//!     let username = args[0].get("username")?;
//!     Ok(create_element(
//!         dom,
//!         "div",
//!         &[],
//!         &[Value::List(vec![username, Value::from("uppercase")])],
//!     )
//!     .into())
//! });
//!
//! let descriptor = component(
//!     Box::new(TreeDom),
//!     ComponentOptions {
//!         controller: "ExampleController".into(),
//!         template,
//!         options: serde_json::Map::new(),
//!     },
//! )?;
//!
//! assert_eq!(descriptor.controller_as(), "ctrl");
//! assert_eq!(
//!     descriptor.template()?,
//!     "<div>{{ctrl.username|uppercase}}</div>"
//! );
//! # Ok::<(), njx::CompileError>(())
//! ```

// Data model
pub use njx_ast::{
    filter_expr, interpolation, AccessPath, Child, CompileError, CompilerOptions, ElementNode,
    Param, Segment, Tracker, Value,
};

// Signature scanning
pub use njx_parse::{param_names, parse_params};

// Compilation
pub use njx_compile::{
    compile, compile_with_options, component, create_element, ng_repeat, ng_repeat_entries,
    render_template, Compiled, ComponentDescriptor, ComponentOptions, Dom, Template, TreeDom,
};
pub use njx_compile::component::UNWRAP_ATTR;
pub use njx_compile::repeat::REPEAT_ATTR;

// Re-exported for descriptor option maps
pub use serde_json;

/// Everything needed to author and compile a template.
pub mod prelude {
    pub use crate::{
        compile, component, create_element, filter_expr, interpolation, ng_repeat,
        ng_repeat_entries, render_template, CompileError, Compiled, CompilerOptions,
        ComponentDescriptor, ComponentOptions, Dom, ElementNode, Template, Tracker, TreeDom, Value,
    };
}
