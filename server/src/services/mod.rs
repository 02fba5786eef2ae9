//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the contact pipeline (validation, sanitization,
//! signing, outbound delivery) so route handlers stay focused on protocol
//! translation and status mapping.

pub mod signature;
pub mod validation;
pub mod webhook;
