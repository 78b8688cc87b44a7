//! Base 16 a.k.a. hex digits for presentation format.
//!
//! The encoding is defined in [RFC 4648]. Record data in presentation
//! format uses lower case digits throughout.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use std::string::String;

/// Appends the hex digits of `data` to `out`.
pub fn append(data: &[u8], out: &mut String) {
    out.reserve(data.len() * 2);
    for &octet in data {
        out.push(digit(octet >> 4));
        out.push(digit(octet & 0x0F));
    }
}

fn digit(value: u8) -> char {
    char::from(DIGITS[usize::from(value)])
}

const DIGITS: &[u8; 16] = b"0123456789abcdef";

//============ Test ==========================================================
