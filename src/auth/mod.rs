//! Authentication on top of the parser
//!
//! Turns an `Authorization` header value into an [`Identity`]: strip the
//! scheme, parse the token, hand the raw segments to a [`SignatureVerifier`]
//! and read the subject claim. Claim semantics (expiry, audience, issuer)
//! are left to the caller.

pub mod bearer;
pub mod verifier;

pub use bearer::{DEFAULT_SCHEME, extract_credentials};
pub use verifier::{SignatureVerifier, SigningInput};

use crate::error::AuthError;
use crate::limits::MAX_TOKEN_LENGTH;
use crate::parser::Parser;
use crate::token::{ClaimLocation, ClaimSource, Token};
use serde_json::Value;
use std::sync::Arc;

/// Read the subject (`sub` payload claim) as an identity string
///
/// String subjects are returned as-is, integer subjects are rendered in
/// decimal. Empty strings and any other JSON type yield `None`.
pub fn subject_of<S: ClaimSource + ?Sized>(source: &S) -> Option<String> {
    match source.claim("sub", ClaimLocation::Payload)? {
        Value::String(subject) if !subject.is_empty() => Some(subject.clone()),
        Value::Number(number) if number.is_i64() || number.is_u64() => Some(number.to_string()),
        _ => None,
    }
}

/// An authenticated principal
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    subject: String,
    token: Token,
    verified: bool,
}

impl Identity {
    /// Subject the token was issued for
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The parsed token
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Whether a signature verifier accepted the token
    ///
    /// `false` only when the authenticator runs without a verifier.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn into_token(self) -> Token {
        self.token
    }
}

/// Authorization header authenticator
///
/// Configured once and reused for every request.
#[derive(Clone)]
pub struct Authenticator {
    config_scheme: String,
    config_parser: Parser,
    config_verifier: Option<Arc<dyn SignatureVerifier>>,
}

impl Authenticator {
    /// Create a new authenticator with defaults: `Token` scheme, default
    /// parser bounded at 64KB input, no signature verifier
    pub fn new() -> Self {
        Self {
            config_scheme: DEFAULT_SCHEME.to_string(),
            config_parser: Parser::new().max_token_length(MAX_TOKEN_LENGTH).build(),
            config_verifier: None,
        }
    }

    /// Configure the expected scheme keyword (e.g. `Bearer`)
    pub fn scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
        self.config_scheme = scheme.into();
        self
    }

    /// Configure the token parser
    pub fn parser(&mut self, parser: Parser) -> &mut Self {
        self.config_parser = parser;
        self
    }

    /// Configure signature verification
    pub fn verifier<V>(&mut self, verifier: V) -> &mut Self
    where
        V: SignatureVerifier + 'static,
    {
        self.config_verifier = Some(Arc::new(verifier));
        self
    }

    /// Finish configuration
    pub fn build(&mut self) -> Self {
        self.clone()
    }
}

impl Authenticator {
    /// Authenticate an `Authorization` header value
    pub fn authenticate(&self, header_value: &str) -> Result<Identity, AuthError> {
        let raw = extract_credentials(header_value, &self.config_scheme).inspect_err(|_| {
            tracing::warn!(scheme = %self.config_scheme, "Authorization header rejected");
        })?;

        tracing::debug!(length = raw.len(), "Parsing token");

        let (token, [header, payload, _]) =
            self.config_parser.parse_segments(raw).map_err(|e| {
                tracing::warn!(error = %e, "Token parsing failed");
                AuthError::from(e)
            })?;

        let verified = match &self.config_verifier {
            Some(verifier) => {
                let input = SigningInput::new(header, payload, token.signature());
                if !verifier.verify(&input) {
                    tracing::warn!(alg = ?token.algorithm(), "Token signature rejected");
                    return Err(AuthError::SignatureRejected);
                }
                true
            }
            None => {
                tracing::debug!("No signature verifier configured, identity is unverified");
                false
            }
        };

        let subject = subject_of(&token).ok_or_else(|| {
            tracing::warn!("Token has no usable subject claim");
            AuthError::MissingSubject
        })?;

        tracing::debug!(subject = %subject, verified, "Token authenticated");

        Ok(Identity {
            subject,
            token,
            verified,
        })
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::utils::SegmentEncoding;
    use serde_json::json;
    use std::collections::HashMap;

    fn header_value(payload: &str, signature: &[u8]) -> String {
        let enc = SegmentEncoding::Standard;
        format!(
            "Token {}.{}.{}",
            enc.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            enc.encode(payload),
            enc.encode(signature)
        )
    }

    fn signature_is_good(input: &SigningInput<'_>) -> bool {
        input.signature() == b"good"
    }

    #[test]
    fn test_authenticate_without_verifier() {
        let identity = Authenticator::new()
            .authenticate(&header_value(r#"{"sub":"user123"}"#, b"sig"))
            .unwrap();

        assert_eq!(identity.subject(), "user123");
        assert!(!identity.is_verified());
        assert_eq!(identity.token().algorithm(), Some("HS256"));
    }

    #[test]
    fn test_authenticate_with_verifier() {
        let authenticator = Authenticator::new().verifier(signature_is_good).build();

        let identity = authenticator
            .authenticate(&header_value(r#"{"sub":42}"#, b"good"))
            .unwrap();
        assert_eq!(identity.subject(), "42");
        assert!(identity.is_verified());

        assert_eq!(
            authenticator.authenticate(&header_value(r#"{"sub":42}"#, b"bad")),
            Err(AuthError::SignatureRejected)
        );
    }

    #[test]
    fn test_verifier_sees_raw_segments() {
        struct Recorder;

        impl SignatureVerifier for Recorder {
            fn verify(&self, input: &SigningInput<'_>) -> bool {
                input.signing_input() == b"e30=.eyJzdWIiOiJ1In0="
            }
        }

        let authenticator = Authenticator::new().verifier(Recorder).build();
        let identity = authenticator
            .authenticate("Token e30=.eyJzdWIiOiJ1In0=.c2ln")
            .unwrap();
        assert_eq!(identity.subject(), "u");
    }

    #[test]
    fn test_authenticate_failures() {
        let authenticator = Authenticator::new();

        assert_eq!(
            authenticator.authenticate("Bearer e30=.e30=.c2ln"),
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            authenticator.authenticate("Token abc.def"),
            Err(AuthError::Parse(ParseError::SegmentCountMismatch { found: 2 }))
        );
        assert_eq!(
            authenticator.authenticate("Token e30=.e30=.c2ln"),
            Err(AuthError::MissingSubject)
        );
        assert_eq!(
            authenticator.authenticate(&header_value(r#"{"sub":""}"#, b"")),
            Err(AuthError::MissingSubject)
        );
    }

    #[test]
    fn test_authenticate_bounds_token_length() {
        let oversized = format!("Token {}", "a".repeat(MAX_TOKEN_LENGTH + 1));
        assert_eq!(
            Authenticator::new().authenticate(&oversized),
            Err(AuthError::Parse(ParseError::TokenTooLarge {
                size: MAX_TOKEN_LENGTH + 1,
                max: MAX_TOKEN_LENGTH,
            }))
        );
    }

    #[test]
    fn test_custom_scheme_and_parser() {
        let enc = SegmentEncoding::UrlSafeNoPad;
        let authenticator = Authenticator::new()
            .scheme("Bearer")
            .parser(Parser::new().encoding(enc).build())
            .build();

        let value = format!(
            "Bearer {}.{}.{}",
            enc.encode("{}"),
            enc.encode(r#"{"sub":"alice"}"#),
            enc.encode("sig")
        );
        assert_eq!(authenticator.authenticate(&value).unwrap().subject(), "alice");
    }

    #[test]
    fn test_subject_of_test_double() {
        struct Session(HashMap<String, Value>);

        impl ClaimSource for Session {
            fn claim(&self, name: &str, location: ClaimLocation) -> Option<&Value> {
                match location {
                    ClaimLocation::Payload => self.0.get(name),
                    ClaimLocation::Header => None,
                }
            }

            fn raw_signature(&self) -> &[u8] {
                &[]
            }
        }

        let session = Session(HashMap::from([("sub".to_string(), json!("carol"))]));
        assert_eq!(subject_of(&session), Some("carol".to_string()));

        let session = Session(HashMap::from([("sub".to_string(), json!(-7))]));
        assert_eq!(subject_of(&session), Some("-7".to_string()));

        for sub in [json!(1.5), json!(true), json!(["x"]), Value::Null] {
            let session = Session(HashMap::from([("sub".to_string(), sub)]));
            assert_eq!(subject_of(&session), None);
        }

        let dynamic: &dyn ClaimSource = &Session(HashMap::new());
        assert_eq!(subject_of(dynamic), None);
    }
}
