//! Errors for jwtparse

use std::fmt;
use thiserror::Error;

/// Position of a segment within a compact token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Header,
    Payload,
    Signature,
}

impl Segment {
    /// Zero-based position of the segment (0 = header, 1 = payload, 2 = signature)
    pub fn index(self) -> usize {
        match self {
            Segment::Header => 0,
            Segment::Payload => 1,
            Segment::Signature => 2,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Header => "header",
            Segment::Payload => "payload",
            Segment::Signature => "signature",
        };
        write!(f, "{name} (segment {})", self.index())
    }
}

/// Parser Errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token format: expected 3 segments separated by '.', found {found}")]
    SegmentCountMismatch { found: usize },

    #[error("Failed to decode {segment}: {reason}")]
    SegmentDecodeFailure { segment: Segment, reason: String },

    // ============================================================================
    // JSON Errors
    // ============================================================================
    #[error("Failed to parse {segment} JSON: {reason}")]
    PayloadDecodeFailure { segment: Segment, reason: String },
}

impl ParseError {
    /// Segment that caused the failure, if the failure is tied to one
    pub fn segment(&self) -> Option<Segment> {
        match self {
            ParseError::SegmentDecodeFailure { segment, .. }
            | ParseError::PayloadDecodeFailure { segment, .. } => Some(*segment),
            _ => None,
        }
    }
}

/// Authentication Errors
///
/// Every variant means the presented credential is rejected; callers map all
/// of them to the same unauthenticated response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing or malformed authorization credentials")]
    MissingCredentials,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Signature verification failed")]
    SignatureRejected,

    #[error("Required token claim 'sub' is missing")]
    MissingSubject,
}

impl AuthError {
    /// Whether the failure maps to an unauthenticated outcome (always true)
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            AuthError::MissingCredentials
            | AuthError::Parse(_)
            | AuthError::SignatureRejected
            | AuthError::MissingSubject => true,
        }
    }
}

/// Result type alias for jwtparse operations
pub type Result<T> = std::result::Result<T, ParseError>;
