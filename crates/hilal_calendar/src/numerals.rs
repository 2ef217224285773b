//! ASCII ↔ Arabic-Indic digit conversion.
//!
//! Parse paths normalize to ASCII first; display paths render Arabic-Indic.
//! Extended Arabic-Indic digits (U+06F0..U+06F9, Persian/Urdu keyboards) are
//! accepted on input and rendered back as Arabic-Indic.

/// Arabic-Indic digits U+0660..U+0669, indexed by value.
pub const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Numeric value of a digit in any of the supported scripts.
fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        _ => None,
    }
}

/// Replace every digit with its ASCII form. Other characters pass through.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match digit_value(c) {
            Some(v) => char::from(b'0' + v as u8),
            None => c,
        })
        .collect()
}

/// Replace every digit with its Arabic-Indic form. Other characters pass through.
pub fn to_arabic_indic_digits(s: &str) -> String {
    s.chars()
        .map(|c| match digit_value(c) {
            Some(v) => ARABIC_INDIC_DIGITS[v as usize],
            None => c,
        })
        .collect()
}

/// Parse an integer written in any supported digit script.
///
/// Surrounding whitespace is ignored; anything else non-numeric fails.
pub fn parse_number(s: &str) -> Option<i64> {
    to_ascii_digits(s).trim().parse().ok()
}
