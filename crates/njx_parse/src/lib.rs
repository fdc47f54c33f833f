//! Parameter-list scanning for njx template signatures.
//!
//! A template is authored as a JSX function; its declared parameter names
//! decide what each positional argument binds to (`controllerAs`, the scope
//! root, repeat iteration variables). This crate extracts those names from
//! the literal parameter-list text without evaluating anything.
//!
//! Supported declaration shapes:
//!
//! - arrow functions with a parenthesized list: `(ctrl, $scope) => ...`
//! - arrow functions with a single bare parameter: `item => ...`
//! - conventional declarations: `function name(a, b)` / `function (a, b)`
//! - a bare parenthesized list: `(ctrl, $scope)`
//!
//! Comments inside the list are stripped. Object destructuring is supported
//! one level deep; each destructured field is reported as its own name.

mod scanner;

pub use scanner::{param_names, parse_params};
