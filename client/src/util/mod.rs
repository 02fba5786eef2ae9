//! Browser adapters and pure helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dark_mode` and `viewport` bridge the state modules to the DOM;
//! `contact_form` holds the client-side form model and its validation.

pub mod contact_form;
pub mod dark_mode;
pub mod viewport;
