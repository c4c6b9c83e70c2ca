//! Submission Identity — stable ids derived from submission content.
//!
//! Submissions are identified by `(job_description, created_at)` rather than
//! a store-assigned key, so a list row and a detail fetch can be correlated
//! from content alone.
//!
//! Two derivations exist:
//! - `submission_id`: BLAKE3 over a length-prefixed encoding of both fields,
//!   first 32 hex chars. Collision domain is 128 bits; distinct inputs never
//!   share an encoding, so collisions are hash collisions only.
//! - `legacy_submission_id`: standard base64 of `"<description>-<created_at>"`
//!   cut to 12 chars. Input is encoded one byte per char when every char is
//!   at most U+00FF (what a browser's `btoa` accepts), and as UTF-8 otherwise. Twelve base64 chars cover only the first 9 input bytes,
//!   so any two submissions whose descriptions share a 9-byte prefix collide.
//!   Kept only so ids already handed to clients still resolve.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub const SUBMISSION_ID_LEN: usize = 32;
pub const LEGACY_ID_LEN: usize = 12;

pub fn submission_id(job_description: &str, created_at: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    for field in [job_description, created_at] {
        hasher.update(&(field.len() as u64).to_le_bytes());
        hasher.update(field.as_bytes());
    }
    let hex = hasher.finalize().to_hex();
    hex.as_str()[..SUBMISSION_ID_LEN].to_string()
}

pub fn legacy_submission_id(job_description: &str, created_at: &str) -> String {
    let encoded = STANDARD.encode(latin1_or_utf8(&format!("{job_description}-{created_at}")));
    // base64 output is ASCII, so byte slicing is char slicing.
    encoded[..encoded.len().min(LEGACY_ID_LEN)].to_string()
}

fn latin1_or_utf8(text: &str) -> Vec<u8> {
    if text.chars().all(|c| u32::from(c) <= 0xFF) {
        text.chars().map(|c| c as u8).collect()
    } else {
        text.as_bytes().to_vec()
    }
}
