//! The two trees a completion run works on

pub mod namespace;
pub mod options;

pub use namespace::NamespaceTree;
pub use options::{NodeAddr, OptionsTree};
