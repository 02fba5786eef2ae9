//! Page sections, top to bottom.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section renders one block of `content` and owns its anchor id so the
//! navbar links scroll to it. Everything below the hero is wrapped in
//! `Reveal`.

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;
