use serenity::model::id::UserId;

/// Parse a user mention (`<@123>`, `<@!123>`) or a raw user ID
pub fn parse_user_id(input: &str) -> Result<UserId, String> {
    // Remove mention formatting: <@123456789> -> 123456789
    let cleaned = input
        .trim_start_matches('<')
        .trim_start_matches('@')
        .trim_start_matches('!')
        .trim_end_matches('>');

    match cleaned.parse::<u64>() {
        Ok(id) if id != 0 => Ok(UserId::new(id)),
        _ => Err("Invalid user ID or mention".to_string()),
    }
}

/// Split a leading run of ASCII digits off `input`
fn leading_digits(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input.split_at(end)
}

/// Parse a dollar amount like `10$` or `2.50$`.
///
/// Only the start of the string has to match, so `10$abc` reads as 10.
pub fn parse_usd_amount(input: &str) -> Option<f64> {
    let (whole, rest) = leading_digits(input);
    if whole.is_empty() {
        return None;
    }

    let (number_len, rest) = match rest.strip_prefix('.') {
        Some(after_dot) => {
            let (fraction, after_fraction) = leading_digits(after_dot);
            if fraction.is_empty() {
                return None;
            }
            (whole.len() + 1 + fraction.len(), after_fraction)
        }
        None => (whole.len(), rest),
    };

    if !rest.starts_with('$') {
        return None;
    }
    input[..number_len].parse().ok()
}

/// Parse a whole-dollar amount like `50$` (no fractional part allowed)
pub fn parse_usd_whole(input: &str) -> Option<f64> {
    let (whole, rest) = leading_digits(input);
    if whole.is_empty() || !rest.starts_with('$') {
        return None;
    }
    whole.parse().ok()
}

/// Parse a withdrawal amount typed in a DM
pub fn parse_ltc_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| !amount.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id() {
        assert_eq!(parse_user_id("<@123>").unwrap(), UserId::new(123));
        assert_eq!(parse_user_id("<@!456>").unwrap(), UserId::new(456));
        assert_eq!(parse_user_id("789").unwrap(), UserId::new(789));
        assert!(parse_user_id("@someone").is_err());
        assert!(parse_user_id("0").is_err());
    }

    #[test]
    fn test_parse_usd_amount() {
        assert_eq!(parse_usd_amount("10$"), Some(10.0));
        assert_eq!(parse_usd_amount("2.50$"), Some(2.5));
        assert_eq!(parse_usd_amount("10$abc"), Some(10.0));
        assert_eq!(parse_usd_amount("10"), None);
        assert_eq!(parse_usd_amount("$10"), None);
        assert_eq!(parse_usd_amount("10.$"), None);
        assert_eq!(parse_usd_amount(".5$"), None);
        assert_eq!(parse_usd_amount("-5$"), None);
        assert_eq!(parse_usd_amount("1.2.3$"), None);
    }

    #[test]
    fn test_parse_usd_whole() {
        assert_eq!(parse_usd_whole("50$"), Some(50.0));
        assert_eq!(parse_usd_whole("0$"), Some(0.0));
        assert_eq!(parse_usd_whole("50.5$"), None);
        assert_eq!(parse_usd_whole("0.5$"), None);
        assert_eq!(parse_usd_whole("50"), None);
    }

    #[test]
    fn test_parse_ltc_amount() {
        assert_eq!(parse_ltc_amount("0.5"), Some(0.5));
        assert_eq!(parse_ltc_amount("  2 "), Some(2.0));
        assert_eq!(parse_ltc_amount("-1"), Some(-1.0));
        assert_eq!(parse_ltc_amount("abc"), None);
        assert_eq!(parse_ltc_amount("NaN"), None);
        assert_eq!(parse_ltc_amount(""), None);
    }
}
