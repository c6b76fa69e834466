//! Error Types
//!
//! The configurator core has a narrow failure surface. Requests that name
//! something absent from a catalog are rejected at the call boundary, and
//! settings are validated when loaded. Nothing that runs inside a frame tick
//! returns an error: missing handles and bad delta times are skipped or
//! clamped instead.
//!
//! ```rust,ignore
//! use configurator::errors::{ConfiguratorError, Result};
//!
//! fn focus(name: &str) -> Result<ViewId> {
//!     name.parse()
//! }
//! ```

use thiserror::Error;

use crate::watch::options::ComponentKind;

/// The main error type for the configurator.
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    // ========================================================================
    // Request Errors
    // ========================================================================
    /// A view name that is not part of the closed view set.
    #[error("Unknown view: {0}")]
    UnknownView(String),

    /// A view id with no entry in the active catalog.
    #[error("View not present in catalog: {0}")]
    MissingView(String),

    /// A component kind name that is not face, strap, knob or indicators.
    #[error("Unknown component kind: {0}")]
    UnknownComponent(String),

    /// An option id absent from the given component's option list.
    #[error("Unknown option '{id}' for component {kind}")]
    UnknownOption {
        /// Component the option was looked up in
        kind: ComponentKind,
        /// The rejected option id
        id: String,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Animation durations must be finite and strictly positive.
    #[error("Invalid {name} duration: {value}")]
    InvalidDuration {
        /// Which duration was rejected
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// An option catalog that does not have exactly one default per component.
    #[error("Invalid option catalog: {0}")]
    InvalidCatalog(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, ConfiguratorError>`.
pub type Result<T> = std::result::Result<T, ConfiguratorError>;
