#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! # Watch Configurator
//!
//! Real-time animation core of an interactive 3D watch configurator: eased
//! camera flights between named viewpoints, show/hide slides for the
//! optional crowns, and clock hands that follow the time of day.
//!
//! Rendering is left to the host. It owns the camera rig and the model
//! transforms, and drives [`Configurator::on_frame`] once per displayed
//! frame, directly or through a [`FrameScheduler`](app::FrameScheduler).

pub mod animation;
pub mod app;
pub mod camera;
pub mod configurator;
pub mod errors;
pub mod scene;
pub mod settings;
pub mod utils;
pub mod watch;

pub use animation::{CameraPose, Easing, PartSlideAnimator, SlidePhase, ease_in_out_cubic};
pub use app::{FrameScheduler, FrameState, SubscriptionKey};
pub use camera::{
    CameraRig, CameraTransitionController, OrbitControls, ViewCatalog, ViewId, ViewSpec,
};
pub use configurator::{Configurator, FrameReport, Stage, mount};
pub use errors::{ConfiguratorError, Result};
pub use scene::Transform;
pub use settings::ConfiguratorSettings;
pub use utils::FrameClock;
pub use watch::{ComponentKind, KnobStyle, WatchTransforms};
