//! Size limit constants for input validation

/// Maximum nesting depth for decoded header and payload JSON (512 levels)
/// Counts containers (objects and arrays); `{}` is depth 1
pub const MAX_JSON_DEPTH: usize = 512;

/// Maximum length for a raw token string accepted by the authenticator (64KB)
/// The bare parser is unbounded unless configured
pub const MAX_TOKEN_LENGTH: usize = 64 * 1024;
