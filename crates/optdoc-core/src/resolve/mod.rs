//! Inheritance resolution for the options tree
//!
//! A node's `extends` targets are looked up (and resolved first), then merged
//! into the node structurally: missing doclet fields, missing meta keys and
//! whole missing child subtrees are copied over. Fields and children the node
//! already has always win.

pub mod extends;
pub mod merge;

pub use extends::ExtendsResolver;
pub use merge::merge_from;

use thiserror::Error;

/// Errors that stop a single inheritance chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A lookup re-entered a node whose own targets are still being merged
    #[error("Cyclic extends: {}", format_chain(.chain))]
    CyclicExtends { chain: Vec<String> },

    /// The node asked for does not exist
    #[error("Option node not found: {path}")]
    NodeNotFound { path: String },
}

impl ResolveError {
    /// Whether `path` lies on the cycle this error describes
    pub fn involves(&self, path: &str) -> bool {
        match self {
            ResolveError::CyclicExtends { chain } => chain.iter().any(|entry| entry == path),
            ResolveError::NodeNotFound { .. } => false,
        }
    }
}

fn format_chain(chain: &[String]) -> String {
    chain.join(" → ")
}

/// Move every entry equal to `generic_parent` behind the others.
///
/// Only applies when more than one target is declared. The relative order of
/// all other entries is kept.
pub fn prioritize(targets: Vec<String>, generic_parent: &str) -> Vec<String> {
    if targets.len() < 2 {
        return targets;
    }
    let (generic, mut specific): (Vec<String>, Vec<String>) = targets
        .into_iter()
        .partition(|target| target == generic_parent);
    specific.extend(generic);
    specific
}
