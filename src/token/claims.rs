//! Claim lookup capability
//!
//! Code that consumes parsed tokens is written against [`ClaimSource`] rather
//! than the concrete [`Token`](crate::Token), so alternative representations
//! and test doubles can stand in for it.

use serde_json::Value;

/// Which decoded segment a claim is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimLocation {
    Header,
    Payload,
}

/// Anything that can answer claim lookups and hand out its raw signature
pub trait ClaimSource {
    /// Look up a claim by name in the header or payload
    fn claim(&self, name: &str, location: ClaimLocation) -> Option<&Value>;

    /// Raw, undecoded-by-JSON signature bytes
    fn raw_signature(&self) -> &[u8];

    /// Look up a claim and return it only if it is a JSON string
    fn claim_str(&self, name: &str, location: ClaimLocation) -> Option<&str> {
        self.claim(name, location).and_then(Value::as_str)
    }
}

impl<T: ClaimSource + ?Sized> ClaimSource for &T {
    fn claim(&self, name: &str, location: ClaimLocation) -> Option<&Value> {
        (**self).claim(name, location)
    }

    fn raw_signature(&self) -> &[u8] {
        (**self).raw_signature()
    }
}
