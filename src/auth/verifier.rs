//! Pluggable signature verification
//!
//! The parser never verifies signatures. A [`SignatureVerifier`] holds its own
//! key material and receives the raw segments of a parsed token.

/// The parts of a token a signature is computed over, plus the signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigningInput<'a> {
    header: &'a str,
    payload: &'a str,
    signature: &'a [u8],
}

impl<'a> SigningInput<'a> {
    pub fn new(header: &'a str, payload: &'a str, signature: &'a [u8]) -> Self {
        Self {
            header,
            payload,
            signature,
        }
    }

    /// Encoded header segment, exactly as presented
    pub fn header_segment(&self) -> &'a str {
        self.header
    }

    /// Encoded payload segment, exactly as presented
    pub fn payload_segment(&self) -> &'a str {
        self.payload
    }

    /// Decoded signature bytes
    pub fn signature(&self) -> &'a [u8] {
        self.signature
    }

    /// `header.payload` bytes
    pub fn signing_input(&self) -> Vec<u8> {
        let mut input = Vec::with_capacity(self.header.len() + 1 + self.payload.len());
        input.extend_from_slice(self.header.as_bytes());
        input.push(b'.');
        input.extend_from_slice(self.payload.as_bytes());
        input
    }
}

/// Verifies a token signature
pub trait SignatureVerifier: Send + Sync {
    /// Return `true` if the signature is valid for the signing input
    fn verify(&self, input: &SigningInput<'_>) -> bool;
}

impl<F> SignatureVerifier for F
where
    F: Fn(&SigningInput<'_>) -> bool + Send + Sync,
{
    fn verify(&self, input: &SigningInput<'_>) -> bool {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_input() {
        let input = SigningInput::new("e30=", "eyJ9", b"sig");

        assert_eq!(input.signing_input(), b"e30=.eyJ9");
        assert_eq!(input.header_segment(), "e30=");
        assert_eq!(input.payload_segment(), "eyJ9");
        assert_eq!(input.signature(), b"sig");
    }

    struct ExpectSignature(Vec<u8>);

    impl SignatureVerifier for ExpectSignature {
        fn verify(&self, input: &SigningInput<'_>) -> bool {
            input.signature() == self.0.as_slice()
        }
    }

    fn reject_all(_: &SigningInput<'_>) -> bool {
        false
    }

    #[test]
    fn test_struct_verifier() {
        let verifier = ExpectSignature(b"sig".to_vec());

        assert!(verifier.verify(&SigningInput::new("a", "b", b"sig")));
        assert!(!verifier.verify(&SigningInput::new("a", "b", b"gis")));
    }

    #[test]
    fn test_function_verifier() {
        let verifier: &dyn SignatureVerifier = &reject_all;
        assert!(!verifier.verify(&SigningInput::new("a", "b", b"sig")));
    }
}
