//! Morse code synthesis.
//!
//! This module provides:
//! - `Timings` and the ARRL Farnsworth timing calculator
//! - `SymbolTable` mapping characters and prosigns to dots and dashes
//! - `SegmentPlan` for spacing a message into keyed and silent segments
//! - `Keyer` for scoped synthesis parameters and lazy audio output
//! - `visualize` for a quick look at a sample stream
//! - `random_message` for practice text (with the `practice` feature)

mod cache;
mod keyer;
mod params;
mod plan;
#[cfg(feature = "practice")]
mod practice;
mod symbols;
mod timing;
mod visualize;

pub use keyer::{Code, CodeOptions, Element, Keyer, Override};
pub use params::{
    DEFAULT_BANDWIDTH, DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE, Parameters, TONE_LEVEL_DB,
};
pub use plan::{Characters, Echo, Segment, SegmentPlan, characters, plan, plan_tokens};
#[cfg(feature = "practice")]
pub use practice::{WORD_BREAK_PROBABILITY, random_message};
pub use symbols::{PROSIGNS, Symbol, SymbolTable, WORD_SPACE};
pub use timing::{ARRL_FARNSWORTH_LIMIT, DEFAULT_WPM, Timings, farnsworth, wpm};
pub use visualize::{NEAR_ZERO, VISUALIZE_STRIDE, visualize};
