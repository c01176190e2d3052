//! Post URL short codes and their numeric media IDs.
//!
//! Instagram post URLs carry a base-64-like short code
//! (`https://www.instagram.com/p/C-v2seOohTy/`); the comments API wants the
//! numeric media ID that code encodes.

use regex::Regex;

use crate::error::{InstagramError, Result};

/// Alphabet of the short-code encoding, in digit-value order.
const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Extract the short code from a post URL.
///
/// Matches the first `/p/<segment>` path component; anything after the
/// segment (trailing slash, query string) is ignored.
pub fn extract_short_code(post_url: &str) -> Result<String> {
    let re = Regex::new(r"/p/([^/?#]+)").expect("valid regex");
    match re.captures(post_url).and_then(|c| c.get(1)) {
        Some(code) => Ok(code.as_str().to_string()),
        None => Err(InstagramError::InvalidUrl(post_url.to_string())),
    }
}

/// Decode a short code to its numeric media ID.
///
/// Base-64 positional decode over [`ALPHABET`]. Characters outside the
/// alphabet contribute -1 per position, matching the upstream tooling this
/// replaces; callers are expected to pass codes taken from real post URLs.
///
/// Real media IDs fit in an `i64`; codes that decode past 63 bits wrap
/// around rather than abort, so decoding never panics on any input.
pub fn short_code_to_media_id(short_code: &str) -> i64 {
    let mut media_id: i64 = 0;
    for letter in short_code.chars() {
        let digit = ALPHABET.find(letter).map(|i| i as i64).unwrap_or(-1);
        media_id = media_id.wrapping_mul(64).wrapping_add(digit);
    }
    media_id
}
