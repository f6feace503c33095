//! Node model shared by the options tree and the namespace tree
//!
//! Both trees use the `{children, doclet, meta}` shape. Option nodes key
//! their children by local name; namespace members keep an ordered list.

pub mod clone;
pub mod doclet;
pub mod member;
pub mod option;
pub mod value;

pub use clone::{CloneDepth, clone_default, clone_value};
pub use doclet::{Doclet, Meta};
pub use member::MemberNode;
pub use option::{OptionNode, ResolveState};
pub use value::DocValue;
