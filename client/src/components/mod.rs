//! Reusable UI components shared across page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pixel-styled primitives (`button`, `card`, `field`), page chrome
//! (`navbar`, `footer`, `loading_screen`), the `rating_modal` dialog, and
//! the context/animation wrappers (`theme_provider`, `reveal`).

pub mod button;
pub mod card;
pub mod field;
pub mod footer;
pub mod loading_screen;
pub mod navbar;
pub mod rating_modal;
pub mod reveal;
pub mod theme_provider;
