//! Parameter checks applied at the entry of every storage operation.

use crate::{Error, Result};

/// Largest accepted note id.
pub const MAX_ID: i64 = i32::MAX as i64;

/// Longest accepted title, content or keyword, in bytes.
pub const MAX_TEXT_LEN: usize = 256_000;

/// Check that `id` is in `1..=MAX_ID`.
pub fn validate_id(id: i64) -> Result<i64> {
    if (1..=MAX_ID).contains(&id) {
        Ok(id)
    } else {
        Err(Error::InvalidParameter("invalid number"))
    }
}

/// Check that `text` is between 1 and `MAX_TEXT_LEN` bytes long.
pub fn validate_text(text: &str) -> Result<&str> {
    if (1..=MAX_TEXT_LEN).contains(&text.len()) {
        Ok(text)
    } else {
        Err(Error::InvalidParameter("invalid param length"))
    }
}
