//! URL-safe base64 transcoder
//!
//! Reversible mapping between an arbitrary byte string and a token drawn from
//! the URL-fragment-safe alphabet `[A-Za-z0-9-_]`. Encoding is standard
//! base64 with `+` -> `-`, `/` -> `_` and trailing `=` padding stripped;
//! decoding is the exact inverse. Both functions are pure and touch no
//! shared state.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::DecodeError;

/// Encode bytes into a URL-fragment-safe token without padding
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a token produced by [`encode`] back into bytes
///
/// Rejects tokens containing characters outside the base64url alphabet and
/// tokens whose length cannot come from any byte string (length 4n+1).
pub fn decode(token: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|e| DecodeError::Corrupted(format!("invalid base64url token: {}", e)))
}
