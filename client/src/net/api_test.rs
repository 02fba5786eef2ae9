use super::*;

#[test]
fn contact_endpoint_path() {
    assert_eq!(CONTACT_ENDPOINT, "/api/contact");
}

#[test]
fn contact_failed_message_prefers_server_message() {
    let body = ApiErrorBody {
        success: false,
        message: "Please use a permanent email address".into(),
        error_code: Some("DISPOSABLE_EMAIL".into()),
        details: None,
    };
    assert_eq!(contact_failed_message(400, Some(&body)), "Please use a permanent email address");
}

#[test]
fn contact_failed_message_falls_back_to_status() {
    assert_eq!(contact_failed_message(503, None), "contact request failed: 503");
    let blank = ApiErrorBody { success: false, message: "  ".into(), error_code: None, details: None };
    assert_eq!(contact_failed_message(429, Some(&blank)), "contact request failed: 429");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn submit_contact_is_unavailable_outside_browser() {
    let form = ContactForm::default();
    let result = block_on_ready(submit_contact(&form));
    assert!(result.is_err());
}

/// Minimal executor for a future that never pends.
#[cfg(not(feature = "hydrate"))]
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::task::{Context, Poll, Waker};
    let mut fut = std::pin::pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
