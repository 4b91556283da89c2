//! Byte classification helpers shared by the version and range parsers

/// Check if the byte is an ASCII digit (`0-9`)
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Check if the byte is an uppercase ASCII letter (`A-Z`)
pub const fn is_upper_letter(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Check if the byte is a lowercase ASCII letter (`a-z`)
pub const fn is_lower_letter(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Check if the byte is an ASCII letter of either case
pub const fn is_alpha(b: u8) -> bool {
    is_upper_letter(b) || is_lower_letter(b)
}

/// Check if the byte can appear in a range operator (`=`, `<`, `>`)
pub const fn is_operator_symbol(b: u8) -> bool {
    matches!(b, b'=' | b'<' | b'>')
}

/// Check if the byte stands in for an unspecified version component
pub const fn is_wildcard(b: u8) -> bool {
    matches!(b, b'x' | b'X' | b'*')
}
