use crate::utils::error::{Result, SignError};

/// Returns the first whitespace-delimited token of `input`.
pub fn first_token(input: &str) -> Result<&str> {
    let mut tokens = input.split_whitespace();
    let token = tokens.next().ok_or(SignError::MissingInput)?;

    let ignored = tokens.count();
    if ignored > 0 {
        tracing::debug!("Ignoring {} trailing token(s) after '{}'", ignored, token);
    }

    Ok(token)
}

/// Parses a single numeric token. NaN is rejected since it has no sign category.
pub fn parse_value(token: &str) -> Result<f64> {
    let value: f64 = token.parse().map_err(|source| SignError::InvalidNumber {
        token: token.to_string(),
        source,
    })?;

    if value.is_nan() {
        return Err(SignError::NotANumber {
            token: token.to_string(),
        });
    }

    Ok(value)
}
