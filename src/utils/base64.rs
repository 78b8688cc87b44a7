//! Base 64 for presentation format.
//!
//! The encoding is defined in [RFC 4648]. It is used in presentation format
//! for keys, signatures, and other opaque binary data.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use std::string::String;

/// Appends the padded Base 64 encoding of `data` to `out`.
pub fn append(data: &[u8], out: &mut String) {
    out.reserve(data.len().div_ceil(3) * 4);
    for chunk in data.chunks(3) {
        let mut group = [0u8; 3];
        group[..chunk.len()].copy_from_slice(chunk);
        let group = u32::from(group[0]) << 16
            | u32::from(group[1]) << 8
            | u32::from(group[2]);

        // A chunk of n octets gives n + 1 digits, the rest is padding.
        for i in 0..4 {
            if i <= chunk.len() {
                out.push(digit(group >> (18 - 6 * i)));
            } else {
                out.push('=');
            }
        }
    }
}

fn digit(value: u32) -> char {
    char::from(DIGITS[(value & 0x3F) as usize])
}

const DIGITS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn base64(data: &[u8]) -> String {
        let mut out = String::new();
        append(data, &mut out);
        out
    }

    #[test]
    fn rfc4648_vectors() {
        assert_eq!(base64(b""), "");
        assert_eq!(base64(b"f"), "Zg==");
        assert_eq!(base64(b"fo"), "Zm8=");
        assert_eq!(base64(b"foo"), "Zm9v");
        assert_eq!(base64(b"foob"), "Zm9vYg==");
        assert_eq!(base64(b"fooba"), "Zm9vYmE=");
        assert_eq!(base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn key_material() {
        assert_eq!(base64(b"\x01\x02\x03"), "AQID");
        assert_eq!(base64(b"\x00\x01\x01\x02\x03"), "AAEBAgM=");
        assert_eq!(base64(b"\xfb\xff"), "+/8=");
    }
}
