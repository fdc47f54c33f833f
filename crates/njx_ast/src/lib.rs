//! Core data model for the njx template compiler.
//!
//! njx compiles JSX-authored component templates into AngularJS binding
//! templates. This crate holds the shared data types every other njx crate
//! works with:
//!
//! - **Access paths & tracking values**: placeholder values that record every
//!   property/index access taken through them and render those recordings as
//!   framework expressions (`ctrl.items[2].name`).
//! - **Values**: the tagged variant standing in for everything a JSX
//!   expression position can hold (literals, trackers, inline expression
//!   bodies, objects, lists, nested elements).
//! - **Element trees**: the owned DOM-like tree the element builder produces
//!   and the serializer turns into HTML.
//! - **Errors and options** shared across the compiler crates.

pub mod ast;
pub mod errors;
pub mod expr;
pub mod options;
pub mod path;
pub mod value;

pub use ast::{Child, ElementNode};
pub use errors::CompileError;
pub use expr::{filter_expr, interpolation, Tracker};
pub use options::CompilerOptions;
pub use path::{AccessPath, Segment};
pub use value::{Param, Value};

// Re-export compact_str::CompactString as the crate string type
pub use compact_str::CompactString;
pub use compact_str::CompactString as String;

// Re-export smallvec for path segment storage
pub use smallvec::{smallvec, SmallVec};
