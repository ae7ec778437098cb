use crate::utils::error::{ClientError, Result, ValidationError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ClientError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ClientError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Checks that both operand fields hold something, then parses them.
///
/// Only the exact empty string counts as missing; whitespace-only text is
/// reported as not a number.
pub fn validate_operands(first: &str, second: &str) -> std::result::Result<(i64, i64), ValidationError> {
    if first.is_empty() || second.is_empty() {
        return Err(ValidationError::MissingOperand);
    }

    let a = parse_operand(first).ok_or(ValidationError::NotANumber)?;
    let b = parse_operand(second).ok_or(ValidationError::NotANumber)?;
    Ok((a, b))
}

/// Lenient base-10 parse: leading whitespace, optional sign, then the
/// longest run of digits. Trailing text is ignored ("12abc" is 12, "1.5" is 1).
pub fn parse_operand(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    if negative {
        format!("-{}", digits).parse().ok()
    } else {
        digits.parse().ok()
    }
}
