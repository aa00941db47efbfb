//! Byte-level multipart/form-data handling.
//!
//! Payloads are never decoded as text, so binary images survive both the
//! inbound extraction and the outbound re-encoding untouched.

mod encoder;
mod parser;

pub use encoder::{Envelope, FormPart};
pub use parser::{boundary_from_content_type, extract_file, is_multipart};

const CRLF: &[u8] = b"\r\n";

/// Position of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Position of the last occurrence of `needle` in `haystack`.
fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}
