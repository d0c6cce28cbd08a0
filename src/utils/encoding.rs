//! Strict segment encoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate. Every
//! supported variant decodes strictly: symbols outside the alphabet,
//! whitespace, non-canonical padding and non-zero trailing bits are rejected.

use crate::error::{ParseError, Result, Segment};
use base64::{
    Engine,
    engine::GeneralPurpose,
    engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD},
};

/// Text encoding used for the three token segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SegmentEncoding {
    /// Standard alphabet (`+`, `/`) with canonical `=` padding required
    #[default]
    Standard,
    /// Standard alphabet, padding rejected
    StandardNoPad,
    /// URL-safe alphabet (`-`, `_`) with canonical `=` padding required
    UrlSafe,
    /// URL-safe alphabet, padding rejected (the RFC 7515 form)
    UrlSafeNoPad,
}

impl SegmentEncoding {
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            SegmentEncoding::Standard => &STANDARD,
            SegmentEncoding::StandardNoPad => &STANDARD_NO_PAD,
            SegmentEncoding::UrlSafe => &URL_SAFE,
            SegmentEncoding::UrlSafeNoPad => &URL_SAFE_NO_PAD,
        }
    }

    /// Encode raw bytes into segment text
    pub fn encode(self, input: impl AsRef<[u8]>) -> String {
        self.engine().encode(input)
    }

    /// Decode segment text into raw bytes
    pub fn decode(self, input: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
        self.engine().decode(input)
    }
}

/// Decode one token segment, reporting failures against its position
pub(crate) fn decode_segment(
    input: &str,
    segment: Segment,
    encoding: SegmentEncoding,
) -> Result<Vec<u8>> {
    encoding
        .decode(input)
        .map_err(|e| ParseError::SegmentDecodeFailure {
            segment,
            reason: e.to_string(),
        })
}
