//! Scene Module
//!
//! The slice of the scene graph the configurator writes into: plain
//! transforms owned by the host.

pub mod transform;

pub use transform::Transform;
