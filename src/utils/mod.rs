//! Utility Module
//!
//! - [`time`]: the frame clock producing per-frame timing

pub mod time;

pub use time::FrameClock;
