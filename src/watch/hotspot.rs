use glam::Vec3;

use crate::camera::view::ViewId;
use crate::watch::options::ComponentKind;

/// A clickable marker on the model that focuses one component.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub kind: ComponentKind,
    pub label: &'static str,
    /// Point on the model the leader line starts from.
    pub anchor: Vec3,
    /// Where the clickable label floats.
    pub label_position: Vec3,
}

impl Hotspot {
    #[inline]
    #[must_use]
    pub fn view(&self) -> ViewId {
        self.kind.view()
    }
}

/// The hotspots of the watch model, one per component.
#[must_use]
pub fn watch_hotspots() -> [Hotspot; 4] {
    [
        Hotspot {
            kind: ComponentKind::Face,
            label: "Face",
            anchor: Vec3::new(0.0, 0.2, 0.0),
            label_position: Vec3::new(-0.6, 0.9, 0.4),
        },
        Hotspot {
            kind: ComponentKind::Strap,
            label: "Strap",
            anchor: Vec3::new(0.0, 0.0, 0.9),
            label_position: Vec3::new(-0.8, 0.4, 1.4),
        },
        Hotspot {
            kind: ComponentKind::Knob,
            label: "Crown",
            anchor: Vec3::new(0.376, 0.184, 0.0),
            label_position: Vec3::new(1.0, 0.7, 0.0),
        },
        Hotspot {
            kind: ComponentKind::Indicators,
            label: "Markers",
            anchor: Vec3::new(0.0, 0.19, -0.14),
            label_position: Vec3::new(0.6, 0.9, -0.5),
        },
    ]
}
