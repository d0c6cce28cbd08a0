//! Credential extraction from `Authorization` header values

use crate::error::AuthError;

/// Scheme keyword used when none is configured
pub const DEFAULT_SCHEME: &str = "Token";

/// Strip the scheme keyword from a header value and return the bare token
///
/// The scheme is matched case-insensitively and must be followed by
/// whitespace, e.g. `Token eyJ...` or `Bearer eyJ...`.
pub fn extract_credentials<'a>(
    header_value: &'a str,
    scheme: &str,
) -> Result<&'a str, AuthError> {
    let (found, credentials) = header_value
        .trim()
        .split_once(char::is_whitespace)
        .ok_or(AuthError::MissingCredentials)?;

    if !found.eq_ignore_ascii_case(scheme) {
        return Err(AuthError::MissingCredentials);
    }

    let credentials = credentials.trim_start();
    if credentials.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    Ok(credentials)
}
