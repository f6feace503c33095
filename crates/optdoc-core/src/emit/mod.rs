//! Interface emission into the namespace tree

pub mod interface;
pub mod naming;

pub use interface::InterfaceEmitter;
pub use naming::interface_name;
