/// Lenient integer parsing for values written by hand into documents or left
/// in storage by older page versions: leading whitespace, an optional sign,
/// then as many ASCII digits as there are. `"12px"` is 12, `"abc"` is `None`.
pub(crate) fn leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value = rest[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::leading_int;

    #[test]
    fn parses_prefix_digits() {
        assert_eq!(leading_int("12"), Some(12));
        assert_eq!(leading_int("  7 min"), Some(7));
        assert_eq!(leading_int("-3"), Some(-3));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(leading_int(""), None);
        assert_eq!(leading_int("NaN"), None);
        assert_eq!(leading_int("-"), None);
    }
}
