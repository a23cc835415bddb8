//! Character classes of the Standard ML lexical grammar.
//!
//! The grammar is ASCII throughout, so the predicates work on raw bytes.

/// Checks if `b` is a decimal digit.
#[inline]
pub(super) fn is_dec_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if `b` is a hexadecimal digit.
#[inline]
pub(super) fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Checks if `b` is an ASCII letter.
#[inline]
pub(super) fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if `b` belongs to the symbolic-identifier alphabet.
#[inline]
pub(super) fn is_symbolic(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'%'
            | b'&'
            | b'$'
            | b'#'
            | b'+'
            | b'-'
            | b'/'
            | b':'
            | b'<'
            | b'='
            | b'>'
            | b'?'
            | b'@'
            | b'\\'
            | b'~'
            | b'`'
            | b'^'
            | b'|'
            | b'*'
    )
}

/// Checks if `b` may continue an alphanumeric identifier: a letter, a
/// digit, a prime or an underscore.
#[inline]
pub(super) fn is_alphanumeric(b: u8) -> bool {
    is_letter(b) || is_dec_digit(b) || b == b'\'' || b == b'_'
}

/// Checks if `b` is a single-character string escape.
#[inline]
pub(super) fn is_single_escape(b: u8) -> bool {
    matches!(b, b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' | b'\\' | b'"')
}

/// Checks if `b` names a control character in a `\^c` escape.
#[inline]
pub(super) fn is_control_escape(b: u8) -> bool {
    (b'@'..=b'_').contains(&b)
}

/// Checks if `b` may appear between the backslashes of a `\f...f\`
/// format escape.
#[inline]
pub(super) fn is_format_escape(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0C')
}

/// Checks if `b` is a printable ASCII character.
#[inline]
pub(super) fn is_print(b: u8) -> bool {
    (0x20..=0x7E).contains(&b)
}
