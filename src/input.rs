//! Parsing of user-supplied text fields into simulator parameters.
//!
//! Lists are comma separated, whitespace around tokens is ignored. Every
//! malformed field is rejected here, so the engines only ever see typed,
//! non-negative values.

use crate::error::{InputError, InputResult};

/// Parse a comma-separated list of non-negative integers.
pub fn parse_list(field: &'static str, text: &str) -> InputResult<Vec<u32>> {
    if text.trim().is_empty() {
        return Err(InputError::Empty { field });
    }
    text.split(',').map(|token| parse_value(field, token)).collect()
}

/// Parse a single non-negative integer.
pub fn parse_value(field: &'static str, text: &str) -> InputResult<u32> {
    let token = text.trim();
    if token.is_empty() {
        return Err(InputError::Empty { field });
    }
    let value: i64 = token.parse().map_err(|_| InputError::NotANumber {
        field,
        token: token.to_string(),
    })?;
    if value < 0 {
        return Err(InputError::Negative { field, value });
    }
    u32::try_from(value).map_err(|_| InputError::OutOfRange { field, value })
}
