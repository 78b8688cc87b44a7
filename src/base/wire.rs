//! Creating and consuming data in wire format.
//!
//! Reading wire data happens through an [`octseq::parse::Parser`]
//! positioned somewhere inside a DNS message. Writing happens through a
//! [`Sink`], a small capability set that lets the record encoder target
//! different destinations without knowing which one it is dealing with.

use super::name::Name;
use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf, Truncate};
use octseq::parse::ShortInput;
use std::vec::Vec;

//------------ Sink ----------------------------------------------------------

/// A destination for wire format data.
///
/// Positions are always relative to the start of the sink which, for the
/// purpose of name compression, has to be the start of the DNS message.
pub trait Sink {
    /// Returns the current position, i.e., the number of octets written.
    fn position(&self) -> usize;

    /// Rewinds the sink to `pos`, dropping everything written after it.
    ///
    /// Positions beyond the current one are rejected.
    fn set_position(&mut self, pos: usize) -> Result<(), ShortBuf>;

    /// Appends `data` at the current position.
    fn write(&mut self, data: &[u8]) -> Result<(), ShortBuf>;

    /// Overwrites already written data starting at `pos` with `data`.
    ///
    /// The range must lie entirely within what has been written so far.
    fn write_at(&mut self, pos: usize, data: &[u8]) -> Result<(), ShortBuf>;

    /// Appends a domain name, using name compression if supported.
    ///
    /// The default implementation appends the name uncompressed. Sinks
    /// that keep track of names written earlier override this.
    fn write_compressed_name(&mut self, name: &Name) -> Result<(), ShortBuf> {
        self.write(name.as_slice())
    }

    /// Appends a 16 bit integer in network byte order.
    fn write_u16(&mut self, value: u16) -> Result<(), ShortBuf> {
        self.write(&value.to_be_bytes())
    }

    fn write_u16_at(&mut self, pos: usize, value: u16) -> Result<(), ShortBuf> {
        self.write_at(pos, &value.to_be_bytes())
    }
}

impl<T: Sink + ?Sized> Sink for &mut T {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn set_position(&mut self, pos: usize) -> Result<(), ShortBuf> {
        (**self).set_position(pos)
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ShortBuf> {
        (**self).write(data)
    }

    fn write_at(&mut self, pos: usize, data: &[u8]) -> Result<(), ShortBuf> {
        (**self).write_at(pos, data)
    }

    fn write_compressed_name(&mut self, name: &Name) -> Result<(), ShortBuf> {
        (**self).write_compressed_name(name)
    }
}

/// Overwrites `target[pos..pos + data.len()]` if that range exists.
fn overwrite(
    target: &mut [u8],
    pos: usize,
    data: &[u8],
) -> Result<(), ShortBuf> {
    let end = pos.checked_add(data.len()).ok_or(ShortBuf)?;
    match target.get_mut(pos..end) {
        Some(slot) => {
            slot.copy_from_slice(data);
            Ok(())
        }
        None => Err(ShortBuf),
    }
}

impl Sink for Vec<u8> {
    fn position(&self) -> usize {
        self.len()
    }

    fn set_position(&mut self, pos: usize) -> Result<(), ShortBuf> {
        if pos > self.len() {
            return Err(ShortBuf);
        }
        self.truncate(pos);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ShortBuf> {
        self.extend_from_slice(data);
        Ok(())
    }

    fn write_at(&mut self, pos: usize, data: &[u8]) -> Result<(), ShortBuf> {
        overwrite(self, pos, data)
    }
}

/// A fixed capacity buffer, typically sized to the maximum message size.
impl<const N: usize> Sink for octseq::array::Array<N> {
    fn position(&self) -> usize {
        self.as_ref().len()
    }

    fn set_position(&mut self, pos: usize) -> Result<(), ShortBuf> {
        if pos > self.as_ref().len() {
            return Err(ShortBuf);
        }
        Truncate::truncate(self, pos);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ShortBuf> {
        self.append_slice(data)
    }

    fn write_at(&mut self, pos: usize, data: &[u8]) -> Result<(), ShortBuf> {
        overwrite(self.as_mut(), pos, data)
    }
}

#[cfg(feature = "bytes")]
impl Sink for bytes::BytesMut {
    fn position(&self) -> usize {
        self.len()
    }

    fn set_position(&mut self, pos: usize) -> Result<(), ShortBuf> {
        if pos > self.len() {
            return Err(ShortBuf);
        }
        self.truncate(pos);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ShortBuf> {
        self.extend_from_slice(data);
        Ok(())
    }

    fn write_at(&mut self, pos: usize, data: &[u8]) -> Result<(), ShortBuf> {
        overwrite(self, pos, data)
    }
}

//------------ compose functions ---------------------------------------------

/// Composes some data prefixed by its 16 bit length.
///
/// A two octet placeholder is written first and patched once `op` has
/// finished and the real length is known. If `op` fails or the data turns
/// out longer than 65535 octets, the sink is rewound to where it was
/// before the call.
pub fn compose_len_prefixed<Target, F, E>(
    target: &mut Target,
    op: F,
) -> Result<(), E>
where
    Target: Sink + ?Sized,
    F: FnOnce(&mut Target) -> Result<(), E>,
    E: From<ShortBuf>,
{
    let start = target.position();
    target.write(&[0; 2])?;
    let pos = target.position();
    let res = op(target).and_then(|_| {
        let len = u16::try_from(target.position() - pos)
            .map_err(|_| ShortBuf)?;
        target.write_u16_at(start, len).map_err(Into::into)
    });
    if res.is_err() {
        // Rewinding can only fail if `op` rewound past `start` itself.
        let _ = target.set_position(start);
    }
    res
}

//============ Error Types ===================================================

//------------ DecodeError ---------------------------------------------------

/// Decoding record data failed.
///
/// The two variants require different handling by the caller: truncated
/// data may become complete once more data has arrived, whereas malformed
/// data never will.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// Fewer octets are available than the record data length declares.
    Truncated,

    /// The record data does not have the shape its type requires.
    Malformed(FormError),
}

//--- From

impl From<ShortInput> for DecodeError {
    fn from(_: ShortInput) -> Self {
        DecodeError::Truncated
    }
}

impl From<FormError> for DecodeError {
    fn from(err: FormError) -> Self {
        DecodeError::Malformed(err)
    }
}

//--- Display and Error

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::Truncated => f.write_str("truncated record data"),
            DecodeError::Malformed(ref err) => {
                write!(f, "malformed record data: {}", err)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occured.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }

    /// Returns the diagnostics string.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

//--- Display and Error

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//============ Testing =======================================================
