//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submission is only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ContactReceipt;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiErrorBody;
use crate::util::contact_form::ContactForm;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Prefer the server's own message; fall back to the status code.
#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16, body: Option<&ApiErrorBody>) -> String {
    match body {
        Some(body) if !body.message.trim().is_empty() => body.message.clone(),
        _ => format!("contact request failed: {status}"),
    }
}

/// Submit the contact form to `POST /api/contact`.
///
/// # Errors
///
/// Returns a user-facing message when the request fails or is rejected.
pub async fn submit_contact(form: &ContactForm) -> Result<ContactReceipt, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(&form.normalized())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.json::<ApiErrorBody>().await.ok();
            log::warn!("contact submission rejected: {status}");
            return Err(contact_failed_message(status, body.as_ref()));
        }
        resp.json::<ContactReceipt>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("contact submission requires a browser".to_owned())
    }
}
