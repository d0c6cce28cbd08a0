// Internal modules
mod claims;
#[allow(clippy::module_inception)]
mod token;

// Public API exports
pub use claims::{ClaimLocation, ClaimSource};
pub use token::{ClaimMap, Token};
