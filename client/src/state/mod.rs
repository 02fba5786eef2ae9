//! Application state for the portfolio UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` owns the light/dark preference shared through context and `reveal`
//! owns the one-shot scroll latch used by section wrappers.

pub mod reveal;
pub mod theme;
