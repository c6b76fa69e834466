//! Camera Module
//!
//! - [`view`]: named viewpoints and their catalog
//! - [`rig`]: the borrowed camera/orbit-target capability
//! - [`orbit`]: an orbit-controls rig
//! - [`controller`]: eased transitions between viewpoints

pub mod controller;
pub mod orbit;
pub mod rig;
pub mod view;

pub use controller::{CameraTransitionController, RequestOutcome, TickOutcome};
pub use orbit::OrbitControls;
pub use rig::CameraRig;
pub use view::{ViewCatalog, ViewId, ViewSpec};
