//! Public Token type for parsed compact tokens
//!
//! A `Token` is the structural result of a successful parse: decoded header
//! claims, decoded payload claims and raw signature bytes. Nothing about it
//! has been trusted yet. Signature verification and claim validation are the
//! job of whoever consumes it.

use crate::token::{ClaimLocation, ClaimSource};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Claim name to JSON value mapping, as decoded from a header or payload
pub type ClaimMap = Map<String, Value>;

/// A structurally parsed token
///
/// Two tokens are equal when their header, payload and signature are equal.
///
/// # Examples
///
/// ```
/// let token = jwtparse::parse("e30=.e30=.c2ln").unwrap();
///
/// assert!(token.header().is_empty());
/// assert!(token.payload().is_empty());
/// assert_eq!(token.signature(), b"sig");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    header: ClaimMap,
    payload: ClaimMap,
    signature: Vec<u8>,
}

impl Token {
    /// Assemble a token from decoded parts (internal use)
    pub(crate) fn new(header: ClaimMap, payload: ClaimMap, signature: Vec<u8>) -> Self {
        Self {
            header,
            payload,
            signature,
        }
    }

    /// Get the decoded header claims
    pub fn header(&self) -> &ClaimMap {
        &self.header
    }

    /// Get the decoded payload claims
    pub fn payload(&self) -> &ClaimMap {
        &self.payload
    }

    /// Get the raw signature bytes
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Consume the token, returning header, payload and signature
    pub fn into_parts(self) -> (ClaimMap, ClaimMap, Vec<u8>) {
        (self.header, self.payload, self.signature)
    }

    /// Get the algorithm (alg header)
    pub fn algorithm(&self) -> Option<&str> {
        self.claim_str("alg", ClaimLocation::Header)
    }

    /// Get the token type (typ header)
    pub fn token_type(&self) -> Option<&str> {
        self.claim_str("typ", ClaimLocation::Header)
    }

    /// Get the key ID (kid header)
    pub fn key_id(&self) -> Option<&str> {
        self.claim_str("kid", ClaimLocation::Header)
    }

    /// Get the subject (sub claim)
    pub fn subject(&self) -> Option<&str> {
        self.claim_str("sub", ClaimLocation::Payload)
    }

    /// Get the issuer (iss claim)
    pub fn issuer(&self) -> Option<&str> {
        self.claim_str("iss", ClaimLocation::Payload)
    }

    /// Deserialize the header into a typed view
    pub fn deserialize_header<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.header.clone()))
    }

    /// Deserialize the payload into a typed view
    ///
    /// Note: the payload is not trusted until its signature has been verified.
    pub fn deserialize_payload<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.payload.clone()))
    }
}

impl ClaimSource for Token {
    fn claim(&self, name: &str, location: ClaimLocation) -> Option<&Value> {
        match location {
            ClaimLocation::Header => self.header.get(name),
            ClaimLocation::Payload => self.payload.get(name),
        }
    }

    fn raw_signature(&self) -> &[u8] {
        &self.signature
    }
}
