//! Depth-bounded structural cloning of documentation values
//!
//! Two policies exist and stay separate: inheritance copies values with
//! [`CloneDepth::Unbounded`], while [`clone_default`] stops building fresh
//! containers after [`CloneDepth::DEFAULT`] levels and shares whatever lies
//! below.

use super::value::DocValue;
use std::sync::Arc;

/// How many nested levels below the top receive fresh containers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneDepth {
    /// Every container at every level is duplicated
    Unbounded,
    /// Containers below this many levels are shared with the source
    Levels(usize),
}

impl CloneDepth {
    /// Bound used when the caller does not pick one
    pub const DEFAULT: CloneDepth = CloneDepth::Levels(3);

    /// Budget for the elements of a container, or `None` when they are shared
    fn descend(self) -> Option<CloneDepth> {
        match self {
            CloneDepth::Unbounded => Some(CloneDepth::Unbounded),
            CloneDepth::Levels(0) => None,
            CloneDepth::Levels(n) => Some(CloneDepth::Levels(n - 1)),
        }
    }
}

impl Default for CloneDepth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl DocValue {
    /// Clone with fresh containers down to `depth`.
    ///
    /// Scalars are returned as they are, `Opaque` values are always shared.
    pub fn deep_clone(&self, depth: CloneDepth) -> DocValue {
        match self {
            DocValue::List(items) => {
                let items = match depth.descend() {
                    Some(next) => items.iter().map(|item| item.deep_clone(next)).collect(),
                    None => items.iter().cloned().collect(),
                };
                DocValue::List(Arc::new(items))
            }
            DocValue::Map(entries) => {
                let entries = match depth.descend() {
                    Some(next) => entries
                        .iter()
                        .map(|(key, value)| (key.clone(), value.deep_clone(next)))
                        .collect(),
                    None => entries.as_ref().clone(),
                };
                DocValue::Map(Arc::new(entries))
            }
            DocValue::Opaque(_)
            | DocValue::Null
            | DocValue::Bool(_)
            | DocValue::Number(_)
            | DocValue::String(_) => self.clone(),
        }
    }
}

/// Clone `value` with an explicit depth policy
pub fn clone_value(value: &DocValue, depth: CloneDepth) -> DocValue {
    value.deep_clone(depth)
}

/// Clone `value` with the default shallow bound
pub fn clone_default(value: &DocValue) -> DocValue {
    value.deep_clone(CloneDepth::DEFAULT)
}
