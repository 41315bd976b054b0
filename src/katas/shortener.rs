//! Toy reversible URL codec.
//!
//! Packs two ASCII bytes of the URL into every output `char`, halving the
//! character count. No table of stored links; `decode` recovers the original
//! text from the code alone.

use thiserror::Error;

/// Error type for URL encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlCodecError {
    /// The input contained a non-ASCII character and cannot be packed.
    #[error("non-ASCII character at byte {position}, cannot encode")]
    NonAscii { position: usize },
}

/// Stateless two-bytes-per-char URL codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlShortener;

impl UrlShortener {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `url`, packing byte pairs as `(hi << 8) | lo`. An odd trailing
    /// byte is packed with a zero low half, which `decode` recognizes.
    ///
    /// # Errors
    /// Returns `UrlCodecError::NonAscii` for input outside ASCII; packed
    /// values must stay below the surrogate range.
    pub fn encode(&self, url: &str) -> Result<String, UrlCodecError> {
        if let Some(position) = url.bytes().position(|b| !b.is_ascii()) {
            return Err(UrlCodecError::NonAscii { position });
        }

        let bytes = url.as_bytes();
        let mut code = String::with_capacity(bytes.len().div_ceil(2));
        for pair in bytes.chunks(2) {
            let hi = u32::from(pair[0]) << 8;
            let lo = pair.get(1).copied().map_or(0, u32::from);
            // ASCII hi byte keeps the value below 0x8000, well under the
            // surrogate range, so the conversion cannot fail.
            let packed = char::from_u32(hi | lo).unwrap_or(char::REPLACEMENT_CHARACTER);
            code.push(packed);
        }
        Ok(code)
    }

    /// Decodes a string produced by [`encode`](Self::encode). Total: any
    /// input decodes to something, garbage in garbage out.
    pub fn decode(&self, code: &str) -> String {
        let mut url = String::with_capacity(code.chars().count() * 2);
        for packed in code.chars() {
            let value = packed as u32;
            let hi = (value >> 8) as u8;
            let lo = (value & 0xFF) as u8;
            url.push(char::from(hi));
            if lo != 0 {
                url.push(char::from(lo));
            }
        }
        url
    }
}
