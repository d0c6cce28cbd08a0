use crate::error::{ParseError, Result, Segment};
use crate::limits::MAX_JSON_DEPTH;
use crate::token::{ClaimMap, Token};
use crate::utils::SegmentEncoding;
use crate::utils::depth::max_nesting;
use crate::utils::encoding::decode_segment;
use serde::Deserialize;
use serde_json::Value;

/// Compact token parser
///
/// The parser is configured once and can be reused (and shared across threads)
/// for any number of tokens. Parsing is purely structural: nothing about the
/// resulting [`Token`] is trusted.
///
/// ```
/// use jwtparse::{Parser, SegmentEncoding};
///
/// let parser = Parser::new()
///     .encoding(SegmentEncoding::UrlSafeNoPad)
///     .max_token_length(8 * 1024)
///     .build();
///
/// let token = parser.parse("e30.eyJzdWIiOiJhbGljZSJ9.c2ln").unwrap();
/// assert_eq!(token.subject(), Some("alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parser {
    config_encoding: SegmentEncoding,
    config_max_depth: usize,
    config_max_length: Option<usize>,
}

impl Parser {
    /// Create a new parser with defaults: padded standard encoding, JSON
    /// nesting bounded at 512, no input length bound
    pub fn new() -> Self {
        Self {
            config_encoding: SegmentEncoding::default(),
            config_max_depth: MAX_JSON_DEPTH,
            config_max_length: None,
        }
    }

    /// Configure the segment encoding
    pub fn encoding(&mut self, encoding: SegmentEncoding) -> &mut Self {
        self.config_encoding = encoding;
        self
    }

    /// Configure the maximum JSON nesting depth
    ///
    /// Values above 512 are clamped to 512.
    pub fn max_depth(&mut self, depth: usize) -> &mut Self {
        self.config_max_depth = depth.min(MAX_JSON_DEPTH);
        self
    }

    /// Reject raw input longer than `max` bytes before any decoding
    pub fn max_token_length(&mut self, max: usize) -> &mut Self {
        self.config_max_length = Some(max);
        self
    }

    /// Finish configuration
    pub fn build(&mut self) -> Self {
        self.clone()
    }

    /// Configured segment encoding
    pub fn segment_encoding(&self) -> SegmentEncoding {
        self.config_encoding
    }
}

impl Parser {
    /// Parse a compact token string
    ///
    /// Fails fast on the first violation, checked in this order: input length
    /// (when bounded), segment count, segment decoding (header, payload,
    /// signature), header JSON, payload JSON.
    pub fn parse(&self, raw: &str) -> Result<Token> {
        self.parse_segments(raw).map(|(token, _)| token)
    }

    /// Parse a token and also return the raw segment text it was built from
    pub(crate) fn parse_segments<'a>(&self, raw: &'a str) -> Result<(Token, [&'a str; 3])> {
        // 1. Validate token string length
        if let Some(max) = self.config_max_length {
            if raw.len() > max {
                return Err(ParseError::TokenTooLarge {
                    size: raw.len(),
                    max,
                });
            }
        }

        // 2. Check token format (header, payload, signature)
        let segments = split_segments(raw)?;
        let [header_text, payload_text, signature_text] = segments;

        // 3. Decode all three segments before looking at any JSON
        let header_bytes = decode_segment(header_text, Segment::Header, self.config_encoding)?;
        let payload_bytes = decode_segment(payload_text, Segment::Payload, self.config_encoding)?;
        let signature = decode_segment(signature_text, Segment::Signature, self.config_encoding)?;

        // 4. Parse header and payload JSON; the signature stays opaque
        let header = decode_claims(&header_bytes, Segment::Header, self.config_max_depth)?;
        let payload = decode_claims(&payload_bytes, Segment::Payload, self.config_max_depth)?;

        Ok((Token::new(header, payload, signature), segments))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a compact token string with the default [`Parser`] configuration
pub fn parse(raw: &str) -> Result<Token> {
    Parser::default().parse(raw)
}

fn split_segments(raw: &str) -> Result<[&str; 3]> {
    let mut parts = raw.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok([header, payload, signature]),
        _ => Err(ParseError::SegmentCountMismatch {
            found: raw.split('.').count(),
        }),
    }
}

fn decode_claims(bytes: &[u8], segment: Segment, max_depth: usize) -> Result<ClaimMap> {
    let invalid = |reason: String| ParseError::PayloadDecodeFailure { segment, reason };

    if max_nesting(bytes, max_depth) > max_depth {
        return Err(invalid(format!(
            "Maximum nesting depth of {max_depth} exceeded"
        )));
    }

    // Depth is already bounded above, so serde_json's own limit is lifted to
    // let the configured bound decide
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).map_err(|e| invalid(e.to_string()))?;
    de.end().map_err(|e| invalid(e.to_string()))?;

    match value {
        Value::Object(claims) => Ok(claims),
        other => Err(invalid(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
