//! Configurator Settings
//!
//! Tunable constants of the configurator, with defaults matching the watch
//! model. Settings can be deserialized from JSON; missing fields keep their
//! defaults.
//!
//! ```rust,ignore
//! use configurator::settings::ConfiguratorSettings;
//!
//! let settings = ConfiguratorSettings::from_json_str(r#"{ "transition_ms": 1200 }"#)?;
//! assert_eq!(settings.slide_secs, 0.5);
//! ```

use serde::Deserialize;

use crate::animation::easing::Easing;
use crate::animation::slide::ReversalMode;
use crate::camera::controller::DEFAULT_TRANSITION_MS;
use crate::camera::view::{ViewCatalog, ViewSpec};
use crate::errors::{ConfiguratorError, Result};
use crate::watch::clock::HandOffsets;
use crate::watch::crowns::DEFAULT_SLIDE_SECS;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfiguratorSettings {
    /// Camera transition length in milliseconds.
    pub transition_ms: f64,
    pub transition_easing: Easing,
    /// Crown slide length in seconds.
    pub slide_secs: f32,
    pub slide_reversal: ReversalMode,
    /// Views replacing the built-in viewpoints with the same id.
    pub view_overrides: Vec<ViewSpec>,
    pub hand_offsets: HandOffsets,
    /// Price of the watch before any option.
    pub base_price: f64,
}

impl Default for ConfiguratorSettings {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            transition_easing: Easing::CubicInOut,
            slide_secs: DEFAULT_SLIDE_SECS,
            slide_reversal: ReversalMode::Restart,
            view_overrides: Vec::new(),
            hand_offsets: HandOffsets::default(),
            base_price: 249.0,
        }
    }
}

impl ConfiguratorSettings {
    /// Parses and validates settings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.transition_ms.is_finite() || self.transition_ms <= 0.0 {
            return Err(ConfiguratorError::InvalidDuration {
                name: "transition",
                value: self.transition_ms,
            });
        }
        if !self.slide_secs.is_finite() || self.slide_secs <= 0.0 {
            return Err(ConfiguratorError::InvalidDuration {
                name: "slide",
                value: f64::from(self.slide_secs),
            });
        }
        Ok(())
    }

    /// The built-in viewpoints with this configuration's overrides applied.
    #[must_use]
    pub fn view_catalog(&self) -> ViewCatalog {
        ViewCatalog::default().with_overrides(&self.view_overrides)
    }
}
