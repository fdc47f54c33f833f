//! Access paths recorded on tracking values.
//!
//! An access path is the ordered sequence of property/index accesses taken
//! through a tracking value, e.g. `ctrl.items[2].name` is
//! `[Name("ctrl"), Name("items"), Index(2), Name("name")]`. Paths are
//! immutable: deriving a child path always produces a new sequence.

use crate::String;
use smallvec::SmallVec;

/// One step of an access path: a property name or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Name(String),
    Index(usize),
}

impl Segment {
    /// Classify a raw key the way the framework expression syntax does:
    /// keys that look like unsigned integers become index segments,
    /// everything else is a property name.
    pub fn from_key(key: &str) -> Segment {
        match key.parse::<usize>() {
            Ok(index) => Segment::Index(index),
            Err(_) => Segment::Name(key.into()),
        }
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Name(name.into())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// An immutable sequence of [`Segment`]s, rooted at a parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct AccessPath {
    segments: SmallVec<[Segment; 4]>,
}

impl AccessPath {
    /// A path consisting of the single root segment `name`.
    pub fn root(name: impl Into<String>) -> Self {
        let mut segments = SmallVec::new();
        segments.push(Segment::Name(name.into()));
        Self { segments }
    }

    /// Derive a child path; the parent is left untouched.
    pub fn child(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if the path is exactly the single root segment `name`.
    pub fn is_single_root(&self, name: &str) -> bool {
        matches!(self.segments.as_slice(), [Segment::Name(root)] if root == name)
    }
}
