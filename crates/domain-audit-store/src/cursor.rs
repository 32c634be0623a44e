//! Opaque page tokens.
//!
//! A token is the URL-safe base64 encoding of the last returned entry's sort
//! key, `"{created_time_ms}:{event_id}"`. The next page starts strictly after
//! that key in newest-first order.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode a sort key into a page token
pub fn encode_page_token(created_time_ms: i64, event_id: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!("{}:{}", created_time_ms, event_id))
}

/// Decode a page token back to its sort key; `None` if malformed
pub fn decode_page_token(token: &str) -> Option<(i64, String)> {
    let bytes = URL_SAFE_NO_PAD.decode(token).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let (millis, event_id) = text.split_once(':')?;
    let millis = millis.parse::<i64>().ok()?;
    Some((millis, event_id.to_string()))
}
