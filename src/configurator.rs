//! Configurator Core
//!
//! [`Configurator`] ties the per-frame drivers together and holds the
//! customer's selection. Within one frame tick it runs:
//!
//! - the clock hands, from the frame's wall-clock time
//! - the camera transition, from the frame's timestamp
//! - both crown slides, from the frame's delta time and the selected knob
//!
//! The three write disjoint transforms, so their order inside a tick does
//! not matter. Requests made between ticks are visible to the very next
//! tick.
//!
//! # Panel gating
//!
//! Clicking a hotspot focuses its component: the camera flies to the
//! component's view and the option panel opens only when that transition
//! reports completion. Closing the panel flies back to the default view.

use std::cell::RefCell;
use std::rc::Rc;

use crate::animation::slide::SlidePhase;
use crate::app::{FrameScheduler, FrameState, SubscriptionKey};
use crate::camera::controller::{CameraTransitionController, RequestOutcome, TickOutcome};
use crate::camera::rig::CameraRig;
use crate::camera::view::ViewId;
use crate::errors::Result;
use crate::settings::ConfiguratorSettings;
use crate::watch::WatchTransforms;
use crate::watch::clock::{ClockHandDriver, ClockTime};
use crate::watch::crowns::CrownRig;
use crate::watch::options::{ComponentKind, OptionCatalog, Selection};

/// What happened during one frame tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub camera: TickOutcome,
    pub first_crown: SlidePhase,
    pub second_crown: SlidePhase,
    /// Panel opened by this tick's transition completion.
    pub revealed: Option<ComponentKind>,
}

pub struct Configurator {
    settings: ConfiguratorSettings,
    catalog: OptionCatalog,
    selection: Selection,

    camera: CameraTransitionController,
    crowns: CrownRig,
    clock: ClockHandDriver,

    focused: Option<ComponentKind>,
    open_panel: Option<ComponentKind>,

    subscription: Option<SubscriptionKey>,
}

impl Configurator {
    /// Creates a configurator over the built-in option catalog.
    pub fn new(settings: ConfiguratorSettings) -> Result<Self> {
        Self::with_catalog(settings, OptionCatalog::builtin()?)
    }

    pub fn with_catalog(settings: ConfiguratorSettings, catalog: OptionCatalog) -> Result<Self> {
        settings.validate()?;

        let camera =
            CameraTransitionController::new(settings.view_catalog(), settings.transition_ms)?
                .with_easing(settings.transition_easing);
        let crowns = CrownRig::new(settings.slide_secs, settings.slide_reversal);
        let clock = ClockHandDriver::new(settings.hand_offsets);
        let selection = Selection::defaults(&catalog);

        Ok(Self {
            settings,
            catalog,
            selection,
            camera,
            crowns,
            clock,
            focused: None,
            open_panel: None,
            subscription: None,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &ConfiguratorSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &OptionCatalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[inline]
    #[must_use]
    pub fn camera(&self) -> &CameraTransitionController {
        &self.camera
    }

    #[inline]
    #[must_use]
    pub fn crowns(&self) -> &CrownRig {
        &self.crowns
    }

    /// The option panel currently shown, if any.
    #[inline]
    #[must_use]
    pub fn open_panel(&self) -> Option<ComponentKind> {
        self.open_panel
    }

    /// The component whose panel waits for the camera to settle.
    #[inline]
    #[must_use]
    pub fn focused(&self) -> Option<ComponentKind> {
        self.focused
    }

    #[inline]
    #[must_use]
    pub fn subscription(&self) -> Option<SubscriptionKey> {
        self.subscription
    }

    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.selection.total_price(&self.catalog, self.settings.base_price)
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Flies the camera to `view`. Unknown views are rejected before any
    /// state changes.
    pub fn request_view(
        &mut self,
        view: ViewId,
        rig: Option<&mut dyn CameraRig>,
        now_ms: f64,
    ) -> Result<RequestOutcome> {
        self.camera.request_view(view, rig, now_ms)
    }

    /// Hotspot click: focus `kind` and open its panel once the camera settles.
    pub fn click_hotspot(
        &mut self,
        kind: ComponentKind,
        rig: Option<&mut dyn CameraRig>,
        now_ms: f64,
    ) -> Result<RequestOutcome> {
        let outcome = self.camera.request_view(kind.view(), rig, now_ms)?;

        self.open_panel = None;
        self.focused = Some(kind);
        if outcome == RequestOutcome::AlreadyAtRest {
            self.reveal(kind);
        }
        Ok(outcome)
    }

    /// Closes the option panel and returns to the overview.
    pub fn close_panel(
        &mut self,
        rig: Option<&mut dyn CameraRig>,
        now_ms: f64,
    ) -> Result<RequestOutcome> {
        self.open_panel = None;
        self.focused = None;
        self.camera.request_view(ViewId::Default, rig, now_ms)
    }

    /// Picks an option. The crowns follow on the next tick.
    pub fn select_option(&mut self, kind: ComponentKind, id: &str) -> Result<bool> {
        self.selection.select(&self.catalog, kind, id)
    }

    // ========================================================================
    // Frame tick
    // ========================================================================

    /// Runs every per-frame driver once.
    ///
    /// A missing rig only skips the camera; hands and crowns still update.
    pub fn on_frame(
        &mut self,
        frame: &FrameState,
        rig: Option<&mut dyn CameraRig>,
        parts: &mut WatchTransforms,
    ) -> FrameReport {
        self.clock.update(ClockTime::from_time(&frame.local_time), &mut parts.hands);

        let camera = self.camera.on_frame_tick(frame.time_ms, rig);

        let mut revealed = None;
        if let TickOutcome::Completed(view) = camera
            && let Some(kind) = self.focused
            && kind.view() == view
        {
            self.reveal(kind);
            revealed = Some(kind);
        }

        self.crowns.update(
            self.selection.knob_style(),
            frame.sanitized_dt(),
            &mut parts.crowns,
        );
        let (first_crown, second_crown) = self.crowns.phases();

        FrameReport {
            camera,
            first_crown,
            second_crown,
            revealed,
        }
    }

    /// Unsubscribes from the frame loop and drops any in-flight transition.
    pub fn teardown(&mut self, scheduler: &mut FrameScheduler) {
        if let Some(key) = self.subscription.take() {
            scheduler.unsubscribe(key);
        }
        self.camera.cancel();
        self.focused = None;
        log::info!("Configurator torn down");
    }

    fn reveal(&mut self, kind: ComponentKind) {
        log::debug!("Opening {kind} option panel");
        self.focused = None;
        self.open_panel = Some(kind);
    }
}

/// Externally owned scene objects the configurator writes into.
pub struct Stage<R> {
    /// The camera rig; `None` until the renderer has created it.
    pub rig: Option<R>,
    pub parts: WatchTransforms,
}

impl<R> Stage<R> {
    #[must_use]
    pub fn new(rig: Option<R>) -> Self {
        Self {
            rig,
            parts: WatchTransforms::default(),
        }
    }
}

/// Subscribes `configurator` to `scheduler`, driving `stage` every frame.
///
/// The callback only holds weak references: once either side is dropped it
/// does nothing. Call [`Configurator::teardown`] to remove it.
pub fn mount<R>(
    configurator: &Rc<RefCell<Configurator>>,
    stage: &Rc<RefCell<Stage<R>>>,
    scheduler: &mut FrameScheduler,
) -> SubscriptionKey
where
    R: CameraRig + 'static,
{
    if let Some(previous) = configurator.borrow_mut().subscription.take() {
        scheduler.unsubscribe(previous);
    }

    let weak_configurator = Rc::downgrade(configurator);
    let weak_stage = Rc::downgrade(stage);

    let key = scheduler.subscribe(move |frame| {
        let (Some(configurator), Some(stage)) = (weak_configurator.upgrade(), weak_stage.upgrade())
        else {
            return;
        };
        let (Ok(mut configurator), Ok(mut stage)) =
            (configurator.try_borrow_mut(), stage.try_borrow_mut())
        else {
            log::warn!("Configurator busy during frame {}; tick skipped", frame.frame_count);
            return;
        };

        let Stage { rig, parts } = &mut *stage;
        let rig: Option<&mut dyn CameraRig> = match rig {
            Some(rig) => Some(rig),
            None => None,
        };
        configurator.on_frame(frame, rig, parts);
    });

    configurator.borrow_mut().subscription = Some(key);
    key
}
