//! Camera View Transitions
//!
//! [`CameraTransitionController`] moves the camera and its orbit target
//! between the named viewpoints of a [`ViewCatalog`]. At most one transition
//! is in flight: a new request supersedes the current one and starts from
//! wherever the camera is at that moment, so an interruption never snaps.
//!
//! The controller does not own the camera. Each request and each tick
//! borrows a [`CameraRig`]; when none is available yet the call is
//! deferred rather than failed.

use crate::animation::easing::Easing;
use crate::animation::transition::TransitionState;
use crate::animation::values::CameraPose;
use crate::camera::rig::CameraRig;
use crate::camera::view::{ViewCatalog, ViewId};
use crate::errors::{ConfiguratorError, Result};

/// Default transition length.
pub const DEFAULT_TRANSITION_MS: f64 = 1800.0;

/// Tolerance for deciding that the camera already rests on a view.
const REST_EPSILON: f32 = 1e-4;

/// What a [`request_view`](CameraTransitionController::request_view) call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A fresh transition was started.
    Started,
    /// A fresh transition replaced one that was still running.
    Superseded { previous: ViewId },
    /// The requested view is already the one being animated to.
    AlreadyInFlight,
    /// The camera already rests on the view; it was re-pinned to the stored
    /// values and no transition started.
    AlreadyAtRest,
    /// No rig was available; the request starts on the next tick that has one.
    Deferred,
}

/// Result of one frame tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing in flight, or no rig available this frame.
    Idle,
    /// The camera moved; `progress` is the linear progress in `[0, 1)`.
    Animating { view: ViewId, progress: f32 },
    /// The transition reached its end this tick. Emitted once per transition.
    Completed(ViewId),
}

pub struct CameraTransitionController {
    catalog: ViewCatalog,
    duration_ms: f64,
    easing: Easing,

    active: Option<TransitionState>,
    pending: Option<ViewId>,
    current_view: ViewId,
}

impl CameraTransitionController {
    /// Creates a controller resting on [`ViewId::Default`].
    pub fn new(catalog: ViewCatalog, duration_ms: f64) -> Result<Self> {
        if !duration_ms.is_finite() || duration_ms <= 0.0 {
            return Err(ConfiguratorError::InvalidDuration {
                name: "transition",
                value: duration_ms,
            });
        }

        Ok(Self {
            catalog,
            duration_ms,
            easing: Easing::CubicInOut,
            active: None,
            pending: None,
            current_view: ViewId::Default,
        })
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &ViewCatalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// The most recently requested view (animating or at rest).
    #[inline]
    #[must_use]
    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<&TransitionState> {
        self.active.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some() || self.pending.is_some()
    }

    /// Requests a move to `view`, starting at `now_ms`.
    ///
    /// The start pose is read from the rig, not from the previous view's
    /// nominal values, which absorbs any orbit drift by the user.
    pub fn request_view(
        &mut self,
        view: ViewId,
        rig: Option<&mut dyn CameraRig>,
        now_ms: f64,
    ) -> Result<RequestOutcome> {
        let spec = *self.catalog.get(view)?;

        if let Some(active) = &self.active
            && active.view == view
        {
            return Ok(RequestOutcome::AlreadyInFlight);
        }

        let Some(rig) = rig else {
            log::debug!("No camera rig yet; deferring request for view '{view}'");
            self.active = None;
            self.pending = Some(view);
            self.current_view = view;
            return Ok(RequestOutcome::Deferred);
        };
        self.pending = None;

        let from = rig.pose();
        if self.active.is_none()
            && self.current_view == view
            && from.abs_diff_eq(&spec.pose(), REST_EPSILON)
        {
            rig.set_pose(spec.pose());
            return Ok(RequestOutcome::AlreadyAtRest);
        }

        let previous = self.active.take().map(|t| t.view);
        self.begin(view, from, spec.pose(), now_ms);

        Ok(match previous {
            Some(previous) => {
                log::info!("Camera transition to '{previous}' superseded by '{view}'");
                RequestOutcome::Superseded { previous }
            }
            None => {
                log::info!("Camera transition to '{view}' started");
                RequestOutcome::Started
            }
        })
    }

    /// Advances the in-flight transition to `now_ms` and writes the result
    /// into the rig.
    ///
    /// A non-finite `now_ms` skips the tick without touching the rig.
    pub fn on_frame_tick(&mut self, now_ms: f64, rig: Option<&mut dyn CameraRig>) -> TickOutcome {
        let Some(rig) = rig else {
            if self.active.is_some() || self.pending.is_some() {
                log::trace!("Frame tick without camera rig skipped");
            }
            return TickOutcome::Idle;
        };
        if !now_ms.is_finite() {
            log::warn!("Non-finite frame timestamp {now_ms}; camera tick skipped");
            return TickOutcome::Idle;
        }

        if let Some(view) = self.pending.take() {
            let to = match self.catalog.get(view) {
                Ok(spec) => spec.pose(),
                Err(err) => {
                    log::warn!("Dropping deferred view request: {err}");
                    return TickOutcome::Idle;
                }
            };
            self.begin(view, rig.pose(), to, now_ms);
            log::info!("Deferred camera transition to '{view}' started");
        }

        let Some(active) = &mut self.active else {
            return TickOutcome::Idle;
        };

        let (pose, progress) = active.sample(now_ms);
        let view = active.view;
        rig.set_pose(pose);

        if progress >= 1.0 {
            self.active = None;
            log::info!("Camera transition to '{view}' completed");
            TickOutcome::Completed(view)
        } else {
            TickOutcome::Animating { view, progress }
        }
    }

    /// Drops any in-flight or deferred transition, leaving the camera where
    /// it is.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() || self.pending.take().is_some() {
            log::debug!("Camera transition cancelled");
        }
    }

    fn begin(&mut self, view: ViewId, from: CameraPose, to: CameraPose, now_ms: f64) {
        self.active = Some(TransitionState::new(
            view,
            from,
            to,
            now_ms,
            self.duration_ms,
            self.easing,
        ));
        self.current_view = view;
    }
}
