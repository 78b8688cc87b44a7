//! Record type bitmaps.
//!
//! Two encodings exist. The NXT record of [RFC 2535] uses a plain bitmap
//! where bit _n_ stands for type _n_, limited to the first 128 types. The
//! NSEC, NSEC3, and CSYNC records use the windowed encoding of
//! [RFC 4034], section 4.1.2: the type space is split into 256 windows of
//! 256 types each, and each window present is encoded as its number, the
//! length of its bitmap, and the bitmap itself.
//!
//! [RFC 2535]: https://tools.ietf.org/html/rfc2535
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::Rtype;
use crate::base::wire::FormError;
use core::fmt::{self, Write};
use std::string::String;

/// The maximum length of the bitmap of a single window.
const MAX_WINDOW_LEN: usize = 32;

/// The maximum length of an NXT bitmap.
const MAX_NXT_LEN: usize = 16;

//------------ Windowed Bitmaps ----------------------------------------------

/// Checks that `data` is a correctly encoded windowed bitmap.
///
/// Windows have to appear in strictly increasing order and each bitmap
/// needs to be between one and 32 octets long. An empty bitmap is fine.
pub fn check_windows(mut data: &[u8]) -> Result<(), FormError> {
    let mut last: Option<u8> = None;
    while !data.is_empty() {
        let (window, len, tail) = match *data {
            [window, len, ref tail @ ..] => (window, usize::from(len), tail),
            _ => return Err(FormError::new("short type bitmap window")),
        };
        if len == 0 || len > MAX_WINDOW_LEN {
            return Err(FormError::new("invalid type bitmap window length"));
        }
        if last.map_or(false, |last| window <= last) {
            return Err(FormError::new("type bitmap windows out of order"));
        }
        if tail.len() < len {
            return Err(FormError::new("short type bitmap window"));
        }
        last = Some(window);
        data = &tail[len..];
    }
    Ok(())
}

/// Returns an iterator over the types in a windowed bitmap.
///
/// The bitmap must have been checked via [`check_windows`] before.
pub fn window_types(data: &[u8]) -> WindowIter<'_> {
    WindowIter {
        data,
        block: 0,
        bits: &[],
        pos: 0,
    }
}

/// Writes the types of a windowed bitmap separated by spaces.
pub fn present_windows(data: &[u8], out: &mut String) -> fmt::Result {
    check_windows(data).map_err(|_| fmt::Error)?;
    present_types(window_types(data), out)
}

//------------ WindowIter ----------------------------------------------------

/// An iterator over the types in a windowed bitmap.
#[derive(Clone, Debug)]
pub struct WindowIter<'a> {
    /// The windows not yet started.
    data: &'a [u8],

    /// The upper eight bits of the types of the current window.
    block: u16,

    /// The bitmap of the current window.
    bits: &'a [u8],

    /// The index of the next bit to look at in `bits`.
    pos: usize,
}

impl<'a> Iterator for WindowIter<'a> {
    type Item = Rtype;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while self.pos < self.bits.len() * 8 {
                let pos = self.pos;
                self.pos += 1;
                if self.bits[pos >> 3] & (0x80 >> (pos & 0x07)) != 0 {
                    return Some(Rtype::from_int(self.block | pos as u16));
                }
            }
            let data: &'a [u8] = self.data;
            let (window, len, tail) = match *data {
                [window, len, ref tail @ ..] => {
                    (window, usize::from(len), tail)
                }
                _ => return None,
            };
            let len = len.min(tail.len());
            self.block = u16::from(window) << 8;
            self.bits = &tail[..len];
            self.data = &tail[len..];
            self.pos = 0;
        }
    }
}

//------------ NXT Bitmaps ---------------------------------------------------

/// Checks that `data` is a correctly sized NXT bitmap.
pub fn check_nxt(data: &[u8]) -> Result<(), FormError> {
    if data.is_empty() || data.len() > MAX_NXT_LEN {
        return Err(FormError::new("invalid NXT bitmap length"));
    }
    Ok(())
}

/// Writes the types of an NXT bitmap separated by spaces.
pub fn present_nxt(data: &[u8], out: &mut String) -> fmt::Result {
    check_nxt(data).map_err(|_| fmt::Error)?;
    let types = (0..data.len() * 8)
        .filter(|&pos| data[pos >> 3] & (0x80 >> (pos & 0x07)) != 0)
        .map(|pos| Rtype::from_int(pos as u16));
    present_types(types, out)
}

//------------ Helpers -------------------------------------------------------

fn present_types(
    types: impl Iterator<Item = Rtype>,
    out: &mut String,
) -> fmt::Result {
    for (i, rtype) in types.enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{}", rtype)?;
    }
    Ok(())
}

//============ Testing =======================================================
