//! Cache Id Module
//!
//! Validation of the string keys accepted by the facade.

use crate::error::{CacheError, Result};

/// Returns true for the characters allowed in a cache id.
fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

// == Validate Id ==
/// Checks that `id` is non-empty and made only of `[A-Za-z0-9_.-]`.
///
/// There is no length limit, and punctuation may lead (`-test`, `.test`).
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(CacheError::EmptyId);
    }
    if !id.chars().all(is_id_char) {
        return Err(CacheError::InvalidId(id.to_string()));
    }
    Ok(())
}
