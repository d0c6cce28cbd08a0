//! # jwtparse - Strict Compact Token Parsing
//!
//! > Structural parsing of untrusted `header.payload.signature` credentials.
//!
//! **jwtparse** is the first code to touch a bearer credential. It turns an
//! attacker-controlled string into a [`Token`] holding the decoded header
//! claims, decoded payload claims and raw signature bytes, or rejects it with
//! a precise [`ParseError`].
//!
//! ## Quick Start
//!
//! ```
//! let token = jwtparse::parse("e30=.eyJzdWIiOiJ1In0=.c2ln")?;
//!
//! assert_eq!(token.subject(), Some("u"));
//! assert_eq!(token.signature(), b"sig");
//! # Ok::<(), jwtparse::ParseError>(())
//! ```
//!
//! ## Parsing Rules
//!
//! ```text
//! raw string
//!     │ split on '.'            -> SegmentCountMismatch unless exactly 3 parts
//!     ▼
//! [header, payload, signature]
//!     │ strict decode (0, 1, 2) -> SegmentDecodeFailure { segment }
//!     ▼
//! [bytes, bytes, bytes]
//!     │ JSON object (0, 1)      -> PayloadDecodeFailure { segment }
//!     ▼
//! Token { header, payload, signature }
//! ```
//!
//! Decoding is strict under every [`SegmentEncoding`]: symbols outside the
//! alphabet, whitespace and non-canonical padding are rejected. The default
//! is the padded standard alphabet; the URL-safe unpadded form of RFC 7515 is
//! selected through [`Parser::encoding`]. Header and payload must be JSON
//! objects nested no deeper than 512 levels.
//!
//! ## Trust
//!
//! Parsing makes no trust decision. Signatures are checked by a
//! [`SignatureVerifier`](auth::SignatureVerifier) supplied by the caller, and
//! claim semantics (expiry, audience, issuer) are not checked at all. The
//! [`auth::Authenticator`] wires extraction, parsing and verification
//! together for request handlers.
//!
//! ## Concurrency
//!
//! [`Parser`] is immutable once built and `Send + Sync`; parsing touches only
//! its input, so one parser can serve any number of threads.

pub mod auth;
pub mod error;
pub mod limits;
pub mod parser;
pub mod token;
pub mod utils;

// Public Interface
pub use auth::{Authenticator, Identity};
pub use error::{AuthError, ParseError, Result, Segment};
pub use parser::{Parser, parse};
pub use token::{ClaimLocation, ClaimMap, ClaimSource, Token};
pub use utils::SegmentEncoding;
