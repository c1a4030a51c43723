//! Text matching shared by suit and rank parsing.

/// First code point of each run of ten Unicode decimal digits (general
/// category `Nd`) in the Basic Multilingual Plane.
const DIGIT_ZEROS: [u32; 37] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

/// Returns the single-character case mapping, or `c` itself when the
/// mapping expands to several characters.
fn simple<I: Iterator<Item = char>>(c: char, mut mapped: I) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn upper(c: char) -> char {
    simple(c, c.to_uppercase())
}

fn lower(c: char) -> char {
    simple(c, c.to_lowercase())
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (ua, ub) = (upper(a), upper(b));
    ua == ub || lower(ua) == lower(ub)
}

/// Compares two strings character by character, ignoring case.
///
/// Characters match when they are equal, when their uppercase forms are
/// equal, or when the lowercase forms of those are equal. This accepts
/// `"\u{212A}ing"` (Kelvin sign) for `"King"` and `"\u{17F}pades"` (long s)
/// for `"Spades"`.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| chars_eq_ignore_case(x, y))
}

/// Returns the value of a decimal digit from any BMP script.
fn digit(c: char) -> Option<i32> {
    let code = u32::from(c);
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| i32::try_from(code - zero).ok())
}

/// Parses a signed decimal `i32`.
///
/// One leading `+` or `-` is allowed and every other character must be a
/// decimal digit. Digits outside the Basic Multilingual Plane, whitespace,
/// and overflow are rejected.
pub fn parse_decimal(text: &str) -> Option<i32> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() {
        return None;
    }

    // Accumulate negatively so that i32::MIN parses.
    let mut acc: i32 = 0;
    for c in digits.chars() {
        acc = acc.checked_mul(10)?.checked_sub(digit(c)?)?;
    }
    if negative { Some(acc) } else { acc.checked_neg() }
}
