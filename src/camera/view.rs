//! Named camera viewpoints.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::Deserialize;

use crate::animation::values::CameraPose;
use crate::errors::{ConfiguratorError, Result};

/// The closed set of preset inspection angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Default,
    Face,
    Strap,
    Knob,
    Indicators,
}

impl ViewId {
    pub const ALL: [ViewId; 5] = [
        ViewId::Default,
        ViewId::Face,
        ViewId::Strap,
        ViewId::Knob,
        ViewId::Indicators,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Default => "default",
            ViewId::Face => "face",
            ViewId::Strap => "strap",
            ViewId::Knob => "knob",
            ViewId::Indicators => "indicators",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self> {
        ViewId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ConfiguratorError::UnknownView(s.to_string()))
    }
}

/// Camera position and look-at target for one view.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewSpec {
    pub id: ViewId,
    pub position: Vec3,
    pub target: Vec3,
}

impl ViewSpec {
    #[must_use]
    pub const fn new(id: ViewId, position: Vec3, target: Vec3) -> Self {
        Self {
            id,
            position,
            target,
        }
    }

    #[inline]
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.position, self.target)
    }
}

/// Immutable mapping from view id to viewpoint, built once at startup.
#[derive(Debug, Clone)]
pub struct ViewCatalog {
    views: Vec<ViewSpec>,
}

impl ViewCatalog {
    /// Builds a catalog from `views`. Later entries override earlier ones
    /// with the same id.
    #[must_use]
    pub fn new(views: impl IntoIterator<Item = ViewSpec>) -> Self {
        let mut catalog = Self { views: Vec::new() };
        for spec in views {
            catalog.insert(spec);
        }
        catalog
    }

    /// Returns a copy of this catalog with `overrides` applied on top.
    #[must_use]
    pub fn with_overrides(&self, overrides: &[ViewSpec]) -> Self {
        let mut catalog = self.clone();
        for spec in overrides {
            catalog.insert(*spec);
        }
        catalog
    }

    fn insert(&mut self, spec: ViewSpec) {
        match self.views.iter_mut().find(|v| v.id == spec.id) {
            Some(existing) => *existing = spec,
            None => self.views.push(spec),
        }
    }

    /// Looks up a view; a missing entry is a programming error reported to
    /// the caller.
    pub fn get(&self, id: ViewId) -> Result<&ViewSpec> {
        self.views
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| ConfiguratorError::MissingView(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewSpec> {
        self.views.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl Default for ViewCatalog {
    /// The watch model's preset viewpoints.
    fn default() -> Self {
        Self::new([
            ViewSpec::new(ViewId::Default, Vec3::new(8.0, 8.0, 8.0), Vec3::ZERO),
            ViewSpec::new(ViewId::Face, Vec3::new(0.0, 4.0, 1.0), Vec3::new(0.0, 0.5, 0.0)),
            ViewSpec::new(
                ViewId::Strap,
                Vec3::new(-1.6, 1.0, 4.0),
                Vec3::new(0.0, -0.5, 0.0),
            ),
            ViewSpec::new(ViewId::Knob, Vec3::new(2.0, 0.5, 1.0), Vec3::new(0.8, 0.5, 0.0)),
            ViewSpec::new(
                ViewId::Indicators,
                Vec3::new(0.0, 3.0, 0.2),
                Vec3::new(0.0, 0.5, 0.0),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_covers_every_view() {
        let catalog = ViewCatalog::default();
        assert_eq!(catalog.len(), ViewId::ALL.len());
        for id in ViewId::ALL {
            assert_eq!(catalog.get(id).map(|v| v.id).ok(), Some(id));
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!("knob".parse::<ViewId>().ok(), Some(ViewId::Knob));
        assert!(matches!(
            "bezel".parse::<ViewId>(),
            Err(ConfiguratorError::UnknownView(name)) if name == "bezel"
        ));
    }

    #[test]
    fn overrides_replace_by_id() {
        let face = ViewSpec::new(ViewId::Face, Vec3::ONE, Vec3::ZERO);
        let catalog = ViewCatalog::default().with_overrides(&[face]);
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(ViewId::Face).ok().map(|v| v.position), Some(Vec3::ONE));
    }
}
