//! Encoding record data into wire format.

use super::field::FieldKind;
use super::record::Rdata;
use super::registry::TypeDescriptor;
use crate::base::name::{NameId, NameTable};
use crate::base::wire::{compose_len_prefixed, FormError, Sink};
use core::fmt;
use octseq::builder::ShortBuf;
use std::vec::Vec;

//------------ Encoding ------------------------------------------------------

/// Appends the record data to a sink.
///
/// Names that may be compressed are written via
/// [`Sink::write_compressed_name`], so whether they are compressed is up
/// to the sink. All other names are written in full.
///
/// If encoding fails, the sink is rewound to where it was before.
pub fn compose_rdata<Target: Sink + ?Sized>(
    rdata: &Rdata,
    names: &NameTable,
    target: &mut Target,
) -> Result<(), ComposeError> {
    let start = target.position();
    let res = compose_fields(rdata, names, target);
    if res.is_err() {
        let _ = target.set_position(start);
    }
    res
}

/// Appends the record data preceded by its length to a sink.
///
/// This is what goes into a resource record right after the TTL.
pub fn compose_len_rdata<Target: Sink + ?Sized>(
    rdata: &Rdata,
    names: &NameTable,
    target: &mut Target,
) -> Result<(), ComposeError> {
    compose_len_prefixed(target, |target| {
        compose_fields(rdata, names, target)
    })
}

fn compose_fields<Target: Sink + ?Sized>(
    rdata: &Rdata,
    names: &NameTable,
    target: &mut Target,
) -> Result<(), ComposeError> {
    for item in rdata.fields() {
        let (field, data) = item?;
        match field.kind {
            FieldKind::CompressedName => {
                let id = NameId::from_slice(data)
                    .ok_or(FormError::new("short name handle"))?;
                let name =
                    names.resolve(id).ok_or(ComposeError::UnknownName(id))?;
                target.write_compressed_name(name)?;
            }
            FieldKind::UncompressedName => {
                let id = NameId::from_slice(data)
                    .ok_or(FormError::new("short name handle"))?;
                let name =
                    names.resolve(id).ok_or(ComposeError::UnknownName(id))?;
                target.write(name.as_slice())?;
            }
            _ => target.write(data)?,
        }
    }
    Ok(())
}

impl TypeDescriptor {
    /// Encodes record data of this type, including its length.
    ///
    /// Fails with a form error if the data is of a different type.
    pub fn encode<Target: Sink + ?Sized>(
        &self,
        rdata: &Rdata,
        names: &NameTable,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        if rdata.rtype() != self.rtype {
            return Err(FormError::new("record type mismatch").into());
        }
        compose_len_rdata(rdata, names, target)
    }
}

impl Rdata {
    /// Returns the uncompressed wire format of the record data.
    ///
    /// The returned octets don’t include the record data length.
    pub fn to_wire(
        &self,
        names: &NameTable,
    ) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::with_capacity(self.len());
        compose_rdata(self, names, &mut res)?;
        Ok(res)
    }
}

//------------ ComposeError --------------------------------------------------

/// Encoding record data failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// The sink ran out of space.
    ShortBuf,

    /// A name handle isn’t known to the name table.
    UnknownName(NameId),

    /// The record data doesn’t match its schema.
    Form(FormError),
}

impl From<ShortBuf> for ComposeError {
    fn from(_: ShortBuf) -> Self {
        ComposeError::ShortBuf
    }
}

impl From<FormError> for ComposeError {
    fn from(err: FormError) -> Self {
        ComposeError::Form(err)
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::ShortBuf => f.write_str("buffer size exceeded"),
            ComposeError::UnknownName(id) => {
                write!(f, "unknown name handle {}", id)
            }
            ComposeError::Form(err) => fmt::Display::fmt(&err, f),
        }
    }
}

impl std::error::Error for ComposeError {}

//============ Testing =======================================================
