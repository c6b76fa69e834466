//! Animation Module
//!
//! Time-driven motion for the configurator:
//!
//! - [`easing`]: normalized-time reparametrization curves
//! - [`values`]: linear blending of scalars, vectors and camera poses
//! - [`transition`]: a timestamp-driven camera transition
//! - [`slide`]: the delta-time driven show/hide state machine for parts

pub mod easing;
pub mod slide;
pub mod transition;
pub mod values;

pub use easing::{Easing, ease_in_out_cubic};
pub use slide::{PartPose, PartSlideAnimator, ReversalMode, SlidePhase, SlideTrack};
pub use transition::TransitionState;
pub use values::{CameraPose, Interpolatable};
