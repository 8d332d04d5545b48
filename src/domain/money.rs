use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a fixed-point string with two decimals.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a valid number")]
    InvalidFormat(String),

    #[error("'{0}' has more than two decimal places")]
    TooPrecise(String),

    #[error("'{0}' is too large")]
    Overflow(String),
}

/// Parse a user-typed decimal amount into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, ".75" -> 75, "-50" -> -5000
///
/// The sign is preserved; rejecting non-positive amounts is up to the caller.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (units, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let invalid = || ParseCentsError::InvalidFormat(trimmed.to_string());

    if units.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !units.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }
    if fraction.len() > 2 {
        return Err(ParseCentsError::TooPrecise(trimmed.to_string()));
    }

    let overflow = || ParseCentsError::Overflow(trimmed.to_string());
    let whole: i64 = if units.is_empty() {
        0
    } else {
        units.parse().map_err(|_| overflow())?
    };
    // "5" after the dot means 50 cents
    let fractional: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction.parse().map_err(|_| invalid())?,
    };

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(fractional))
        .ok_or_else(overflow)?;
    Ok(if negative { -cents } else { cents })
}
