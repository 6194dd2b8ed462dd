use crate::error::AppError;

/// Parse a user-supplied epoch-millisecond timestamp.
///
/// A decimal part is truncated toward zero, so `12.5` and `-12.5` give `12`
/// and `-12`. Exponents and non-finite values are rejected.
pub(crate) fn parse_timestamp(s: &str) -> Result<i64, AppError> {
    let invalid = || AppError::InvalidInput {
        input: s.to_string(),
    };
    let trimmed = s.trim();

    let whole = match trimmed.split_once('.') {
        Some((whole, fraction))
            if !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit()) =>
        {
            whole
        }
        Some(_) => return Err(invalid()),
        None => trimmed,
    };

    whole.parse::<i64>().map_err(|_| invalid())
}
