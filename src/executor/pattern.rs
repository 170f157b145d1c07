//! Character-class matchers for free-form contact fields

/// Returns true if `value` is non-empty and consists only of ASCII digits.
pub fn is_digits_only(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Returns true if `value` starts with a parenthesized area code.
///
/// Shape: `(`, one or more ASCII digits, `)`, then any suffix (possibly
/// empty). Anchored at the start of the string.
pub fn has_area_code_prefix(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('(') else {
        return false;
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && rest.as_bytes().get(digits) == Some(&b')')
}
