//! Webhook signing and random identifiers.
//!
//! DESIGN
//! ======
//! The signature is lowercase hex HMAC-SHA256 over the canonical payload:
//! compact JSON, object keys sorted, every character outside printable ASCII
//! escaped as `\uXXXX` (UTF-16 surrogate pairs above the BMP). Receivers
//! that re-serialize with sorted keys, no whitespace and ASCII-only output
//! get identical bytes. `serde_json::Value` keeps object keys in a
//! `BTreeMap`, which supplies the ordering.

use std::io;

use hmac::{Hmac, Mac};
use rand::Rng;
use serde::Serialize;
use serde_json::ser::Formatter;
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Compact formatter that escapes everything outside `' '..='~'`.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if matches!(c, ' '..='~') {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Canonical signing form of `payload`.
#[must_use]
pub fn canonical_json(payload: &serde_json::Value) -> Option<String> {
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    payload.serialize(&mut ser).ok()?;
    String::from_utf8(buf).ok()
}

/// Sign `payload` with `secret`. Returns `None` when signing is disabled
/// (empty secret).
#[must_use]
pub fn sign_payload(payload: &serde_json::Value, secret: &str) -> Option<String> {
    if secret.is_empty() {
        return None;
    }
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(canonical_json(payload)?.as_bytes());
    Some(hex::encode(mac.finalize().into_bytes()))
}

/// Check `signature` against `payload` in constant time.
///
/// An empty secret means signing is disabled and every payload verifies. A
/// configured secret with a missing or malformed signature never verifies.
#[must_use]
pub fn verify_signature(payload: &serde_json::Value, signature: &str, secret: &str) -> bool {
    if secret.is_empty() {
        return true;
    }
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };
    let (Ok(mut mac), Some(canonical)) = (HmacSha256::new_from_slice(secret.as_bytes()), canonical_json(payload)) else {
        return false;
    };
    mac.update(canonical.as_bytes());
    mac.verify_slice(&expected).is_ok()
}

/// Random 32-byte signing secret as 64 hex chars.
#[must_use]
pub fn generate_secret() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    hex::encode(bytes)
}

/// Random 16-byte id as 32 hex chars, used for health-check pings.
#[must_use]
pub fn generate_ping_id() -> String {
    let bytes: [u8; 16] = rand::rng().random();
    hex::encode(bytes)
}

/// Tracking id for a contact submission: `req_` plus 12 hex chars.
#[must_use]
pub fn new_request_id() -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("req_{}", &simple[..12])
}

#[cfg(test)]
#[path = "signature_test.rs"]
mod tests;
