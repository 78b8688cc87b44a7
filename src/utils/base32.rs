//! Base 32 for presentation format.
//!
//! Only the *base32hex* variant of [RFC 4648] with its extended hex
//! alphabet is needed. NSEC3 uses it for the next hashed owner name. As is
//! custom in presentation format, letters are lower case and there is no
//! padding.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use std::string::String;

/// Appends the *base32hex* encoding of `data` to `out`.
pub fn append_hex(data: &[u8], out: &mut String) {
    out.reserve((data.len() * 8).div_ceil(5));

    // Bits not yet encoded, right aligned. There are never more than 12.
    let mut pending = 0u16;
    let mut bits = 0u32;
    for &octet in data {
        pending = pending << 8 | u16::from(octet);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(digit(pending >> bits));
        }
        pending &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(digit(pending << (5 - bits)));
    }
}

fn digit(value: u16) -> char {
    char::from(HEX_DIGITS[usize::from(value & 0x1F)])
}

const HEX_DIGITS: &[u8; 32] = b"0123456789abcdefghijklmnopqrstuv";

//============ Test ==========================================================
