//! Signal processing types and traits.
//!
//! This module provides the signal abstractions used throughout the crate:
//! - `Signal` trait for unbounded sample sources
//! - `AudioSignal` trait for sample-rate-aware signals
//! - `AudioSignalExt` trait for level and length adapters
//! - sample primitives (`tone`, `silence`, `crop`, `volume`)

mod audio;
mod core;
mod primitives;

pub use audio::{AudioSignal, AudioSignalExt};
pub use self::core::Signal;
pub use primitives::{Crop, Silence, crop, db_to_gain, sample_count, silence, tone, volume};
