//! Component option catalog and the current selection.
//!
//! The catalog lists, for each configurable component, the options a
//! customer can pick and what they add to the price. It is plain data: the
//! built-in one is embedded JSON and a shop can supply its own.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::camera::view::ViewId;
use crate::errors::{ConfiguratorError, Result};

const BUILTIN_CATALOG: &str = include_str!("../../assets/component_options.json");

/// The configurable parts of the watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Face,
    Strap,
    Knob,
    Indicators,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Face,
        ComponentKind::Strap,
        ComponentKind::Knob,
        ComponentKind::Indicators,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Face => "face",
            ComponentKind::Strap => "strap",
            ComponentKind::Knob => "knob",
            ComponentKind::Indicators => "indicators",
        }
    }

    /// The viewpoint that frames this component.
    #[must_use]
    pub fn view(self) -> ViewId {
        match self {
            ComponentKind::Face => ViewId::Face,
            ComponentKind::Strap => ViewId::Strap,
            ComponentKind::Knob => ViewId::Knob,
            ComponentKind::Indicators => ViewId::Indicators,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfiguratorError::UnknownComponent(s.to_string()))
    }
}

/// Crown layout, derived from the knob option id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnobStyle {
    SingleCrown,
    DoubleCrown,
    TripleCrown,
}

impl KnobStyle {
    /// Maps a knob option id. Ids outside the three crown layouts are
    /// treated as a plain single crown.
    #[must_use]
    pub fn from_option_id(id: &str) -> Self {
        match id {
            "double-crown" => KnobStyle::DoubleCrown,
            "triple-crown" => KnobStyle::TripleCrown,
            _ => KnobStyle::SingleCrown,
        }
    }

    #[must_use]
    pub fn option_id(self) -> &'static str {
        match self {
            KnobStyle::SingleCrown => "single-crown",
            KnobStyle::DoubleCrown => "double-crown",
            KnobStyle::TripleCrown => "triple-crown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOption {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Hex dial color, for face options that recolor the dial material.
    #[serde(default)]
    pub color: Option<String>,
    pub price: f64,
    pub is_default: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentCategory {
    pub title: String,
    pub description: String,
    pub options: Vec<ComponentOption>,
}

impl ComponentCategory {
    #[must_use]
    pub fn option(&self, id: &str) -> Option<&ComponentOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// The option flagged as default. Validated catalogs always have one.
    #[must_use]
    pub fn default_option(&self) -> Option<&ComponentOption> {
        self.options.iter().find(|o| o.is_default)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionCatalog {
    face: ComponentCategory,
    strap: ComponentCategory,
    knob: ComponentCategory,
    indicators: ComponentCategory,
}

impl OptionCatalog {
    /// Parses and validates a catalog.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: OptionCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn category(&self, kind: ComponentKind) -> &ComponentCategory {
        match kind {
            ComponentKind::Face => &self.face,
            ComponentKind::Strap => &self.strap,
            ComponentKind::Knob => &self.knob,
            ComponentKind::Indicators => &self.indicators,
        }
    }

    fn validate(&self) -> Result<()> {
        for kind in ComponentKind::ALL {
            let category = self.category(kind);
            let defaults = category.options.iter().filter(|o| o.is_default).count();
            if defaults != 1 {
                return Err(ConfiguratorError::InvalidCatalog(format!(
                    "component {kind} has {defaults} default options, expected exactly one"
                )));
            }
            if let Some(bad) = category.options.iter().find(|o| !o.price.is_finite()) {
                return Err(ConfiguratorError::InvalidCatalog(format!(
                    "option {} has a non-finite price",
                    bad.id
                )));
            }
        }
        Ok(())
    }
}

/// One chosen option id per component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    face: String,
    strap: String,
    knob: String,
    indicators: String,
}

impl Selection {
    /// Every component set to its catalog default.
    #[must_use]
    pub fn defaults(catalog: &OptionCatalog) -> Self {
        let pick = |kind| {
            catalog
                .category(kind)
                .default_option()
                .map(|o| o.id.clone())
                .unwrap_or_default()
        };
        Self {
            face: pick(ComponentKind::Face),
            strap: pick(ComponentKind::Strap),
            knob: pick(ComponentKind::Knob),
            indicators: pick(ComponentKind::Indicators),
        }
    }

    #[must_use]
    pub fn get(&self, kind: ComponentKind) -> &str {
        match kind {
            ComponentKind::Face => &self.face,
            ComponentKind::Strap => &self.strap,
            ComponentKind::Knob => &self.knob,
            ComponentKind::Indicators => &self.indicators,
        }
    }

    /// Selects `id` for `kind`. Returns whether the selection changed.
    pub fn select(
        &mut self,
        catalog: &OptionCatalog,
        kind: ComponentKind,
        id: &str,
    ) -> Result<bool> {
        if catalog.category(kind).option(id).is_none() {
            return Err(ConfiguratorError::UnknownOption {
                kind,
                id: id.to_string(),
            });
        }

        let slot = match kind {
            ComponentKind::Face => &mut self.face,
            ComponentKind::Strap => &mut self.strap,
            ComponentKind::Knob => &mut self.knob,
            ComponentKind::Indicators => &mut self.indicators,
        };
        if *slot == id {
            return Ok(false);
        }
        log::debug!("Selected {kind} option '{id}' (was '{slot}')");
        *slot = id.to_string();
        Ok(true)
    }

    #[must_use]
    pub fn knob_style(&self) -> KnobStyle {
        KnobStyle::from_option_id(&self.knob)
    }

    /// `base_price` plus the price of every selected option.
    #[must_use]
    pub fn total_price(&self, catalog: &OptionCatalog, base_price: f64) -> f64 {
        ComponentKind::ALL
            .into_iter()
            .filter_map(|kind| catalog.category(kind).option(self.get(kind)))
            .map(|option| option.price)
            .fold(base_price, |total, price| total + price)
    }
}
