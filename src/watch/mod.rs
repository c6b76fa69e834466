//! Watch Model
//!
//! Everything specific to the watch being configured: the clock hands, the
//! optional crowns, the hotspots and the option catalog.

pub mod clock;
pub mod crowns;
pub mod hotspot;
pub mod options;

pub use clock::{ClockHandDriver, ClockHands, ClockTime, HandAngles, HandOffsets};
pub use crowns::{CrownRig, CrownTransforms};
pub use hotspot::{Hotspot, watch_hotspots};
pub use options::{ComponentKind, KnobStyle, OptionCatalog, Selection};

/// Every transform the per-frame drivers write.
#[derive(Debug, Clone, Default)]
pub struct WatchTransforms {
    pub hands: ClockHands,
    pub crowns: CrownTransforms,
}
