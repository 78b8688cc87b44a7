//! Service binding parameters.
//!
//! The SVCB and HTTPS records of [RFC 9460] end in a sequence of
//! parameters, each encoded as a 16 bit key, a 16 bit length, and a value
//! of that length. Keys must appear in strictly increasing order. The
//! values of the keys registered so far have a well-defined shape that is
//! checked, all other values are taken as opaque octets.
//!
//! [RFC 9460]: https://tools.ietf.org/html/rfc9460

use crate::base::iana::SvcParamKey;
use crate::base::wire::FormError;
use crate::utils::base64;
use core::fmt::{self, Write};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::string::String;
use std::vec::Vec;

//------------ SvcParamIter --------------------------------------------------

/// An iterator over the parameters of a parameter sequence.
///
/// Each item is either the key and value of the next parameter or an
/// error if the remaining data is too short for a parameter. The iterator
/// ends after an error.
#[derive(Clone, Debug)]
pub struct SvcParamIter<'a>(&'a [u8]);

impl<'a> SvcParamIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        SvcParamIter(data)
    }
}

impl<'a> Iterator for SvcParamIter<'a> {
    type Item = Result<(SvcParamKey, &'a [u8]), FormError>;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.0;
        let (key, len, tail) = match *data {
            [] => return None,
            [k1, k2, l1, l2, ref tail @ ..] => (
                SvcParamKey::from_int(u16::from_be_bytes([k1, k2])),
                usize::from(u16::from_be_bytes([l1, l2])),
                tail,
            ),
            _ => {
                self.0 = &[];
                return Some(Err(FormError::new("short service parameter")));
            }
        };
        if tail.len() < len {
            self.0 = &[];
            return Some(Err(FormError::new("short service parameter")));
        }
        let (value, tail) = tail.split_at(len);
        self.0 = tail;
        Some(Ok((key, value)))
    }
}

//------------ Checking ------------------------------------------------------

/// Checks that `data` is a correctly encoded parameter sequence.
pub fn check(data: &[u8]) -> Result<(), FormError> {
    let mut last: Option<SvcParamKey> = None;
    for item in SvcParamIter::new(data) {
        let (key, value) = item?;
        if last.map_or(false, |last| key <= last) {
            return Err(FormError::new("service parameters out of order"));
        }
        check_value(key, value)?;
        last = Some(key);
    }
    Ok(())
}

/// Checks the value of a single parameter.
fn check_value(key: SvcParamKey, value: &[u8]) -> Result<(), FormError> {
    let ok = match key {
        SvcParamKey::MANDATORY => {
            !value.is_empty()
                && value.len() % 2 == 0
                && value.chunks(2).all(|chunk| chunk != [0, 0])
        }
        SvcParamKey::ALPN => !value.is_empty() && alpn_ids(value).is_some(),
        SvcParamKey::NO_DEFAULT_ALPN => value.is_empty(),
        SvcParamKey::PORT => value.len() == 2,
        SvcParamKey::IPV4HINT => !value.is_empty() && value.len() % 4 == 0,
        SvcParamKey::IPV6HINT => !value.is_empty() && value.len() % 16 == 0,
        SvcParamKey::DOHPATH => !value.is_empty(),
        SvcParamKey::INVALID => {
            return Err(FormError::new("invalid service parameter key"))
        }
        _ => true,
    };
    if ok {
        Ok(())
    } else {
        Err(FormError::new("invalid service parameter value"))
    }
}

/// Splits the value of the alpn parameter into its protocol identifiers.
///
/// Returns `None` if the value isn’t a sequence of non-empty character
/// strings.
fn alpn_ids(mut value: &[u8]) -> Option<Vec<&[u8]>> {
    let mut res = Vec::new();
    while let Some((&len, tail)) = value.split_first() {
        let len = usize::from(len);
        if len == 0 || tail.len() < len {
            return None;
        }
        let (id, tail) = tail.split_at(len);
        res.push(id);
        value = tail;
    }
    Some(res)
}

//------------ Presentation --------------------------------------------------

/// Writes the parameters in presentation format.
///
/// The parameters are separated by spaces. Each is given as the key
/// mnemonic, followed by an equals sign and the value unless the value is
/// empty.
pub fn present(data: &[u8], out: &mut String) -> fmt::Result {
    check(data).map_err(|_| fmt::Error)?;
    for (i, item) in SvcParamIter::new(data).enumerate() {
        let (key, value) = item.map_err(|_| fmt::Error)?;
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{}", key)?;
        if value.is_empty() {
            continue;
        }
        out.push('=');
        present_value(key, value, out)?;
    }
    Ok(())
}

/// Writes a non-empty parameter value.
fn present_value(
    key: SvcParamKey,
    value: &[u8],
    out: &mut String,
) -> fmt::Result {
    match key {
        SvcParamKey::MANDATORY => {
            for (i, chunk) in value.chunks(2).enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let key = u16::from_be_bytes([chunk[0], chunk[1]]);
                write!(out, "{}", SvcParamKey::from_int(key))?;
            }
        }
        SvcParamKey::ALPN => {
            let ids = alpn_ids(value).ok_or(fmt::Error)?;
            out.push('"');
            for (i, id) in ids.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                for &ch in id {
                    match ch {
                        b'"' | b'\\' => {
                            out.push_str("\\\\\\");
                            out.push(char::from(ch));
                        }
                        b',' => out.push_str("\\\\,"),
                        0x20..=0x7E => out.push(char::from(ch)),
                        _ => write!(out, "\\{:03}", ch)?,
                    }
                }
            }
            out.push('"');
        }
        SvcParamKey::PORT => {
            write!(out, "{}", u16::from_be_bytes([value[0], value[1]]))?;
        }
        SvcParamKey::IPV4HINT => {
            for (i, chunk) in value.chunks(4).enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let addr =
                    Ipv4Addr::new(chunk[0], chunk[1], chunk[2], chunk[3]);
                write!(out, "{}", addr)?;
            }
        }
        SvcParamKey::IPV6HINT => {
            for (i, chunk) in value.chunks(16).enumerate() {
                if i > 0 {
                    out.push(',');
                }
                let mut octets = [0u8; 16];
                octets.copy_from_slice(chunk);
                write!(out, "{}", Ipv6Addr::from(octets))?;
            }
        }
        SvcParamKey::ECH => base64::append(value, out),
        _ => {
            out.push('"');
            for &ch in value {
                match ch {
                    b'"' | b'\\' => {
                        out.push('\\');
                        out.push(char::from(ch));
                    }
                    0x20..=0x7E => out.push(char::from(ch)),
                    _ => write!(out, "\\{:03}", ch)?,
                }
            }
            out.push('"');
        }
    }
    Ok(())
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn param(key: u16, value: &[u8]) -> Vec<u8> {
        let mut res = Vec::new();
        res.extend_from_slice(&key.to_be_bytes());
        res.extend_from_slice(&(value.len() as u16).to_be_bytes());
        res.extend_from_slice(value);
        res
    }

    fn params(items: &[(u16, &[u8])]) -> Vec<u8> {
        items.iter().flat_map(|(key, value)| param(*key, value)).collect()
    }

    fn show(data: &[u8]) -> Result<String, fmt::Error> {
        let mut out = String::new();
        present(data, &mut out).map(|_| out)
    }

    #[test]
    fn present_known_keys() {
        let data = params(&[
            (0, b"\x00\x01\x00\x03"),
            (1, b"\x02h2\x05h3,\"x"),
            (2, b""),
            (3, b"\x01\xbb"),
            (4, b"\xc0\x00\x02\x01\xc0\x00\x02\x02"),
            (5, b"foo"),
            (6, b"\x20\x01\x0d\xb8\0\0\0\0\0\0\0\0\0\0\0\x01"),
            (7, b"/q{?dns}"),
        ]);
        assert_eq!(
            show(&data).unwrap(),
            "mandatory=alpn,port \
             alpn=\"h2,h3\\\\,\\\\\\\"x\" \
             no-default-alpn \
             port=443 \
             ipv4hint=192.0.2.1,192.0.2.2 \
             ech=Zm9v \
             ipv6hint=2001:db8::1 \
             dohpath=\"/q{?dns}\""
        );
    }

    #[test]
    fn present_unknown_keys() {
        let data = params(&[(8, b""), (9, b"a\"b\x01")]);
        assert_eq!(show(&data).unwrap(), "key8 key9=\"a\\\"b\\001\"");
        assert_eq!(show(b"").unwrap(), "");
    }

    #[test]
    fn check_shapes() {
        assert!(check(&params(&[(1, b"")])).is_err());
        assert!(check(&params(&[(1, b"\x00")])).is_err());
        assert!(check(&params(&[(1, b"\x03h2")])).is_err());
        assert!(check(&params(&[(2, b"x")])).is_err());
        assert!(check(&params(&[(3, b"\x01")])).is_err());
        assert!(check(&params(&[(4, b"\x01\x02\x03")])).is_err());
        assert!(check(&params(&[(6, &[0; 4])])).is_err());
        assert!(check(&params(&[(0, b"\x00")])).is_err());
        assert!(check(&params(&[(0, b"\x00\x00")])).is_err());
        assert!(check(&params(&[(7, b"")])).is_err());
        assert!(check(&params(&[(65535, b"")])).is_err());
        assert!(check(&params(&[(5, b"")])).is_ok());
        assert!(check(&params(&[(3, b"\x00\x35"), (1, b"\x02h2")])).is_err());
        let port = &b"\x00\x35"[..];
        assert!(check(&params(&[(3, port), (3, port)])).is_err());
        assert!(check(b"\x00\x03\x00\x02\x00").is_err());
        assert!(check(b"\x00\x03\x00").is_err());
    }
}
