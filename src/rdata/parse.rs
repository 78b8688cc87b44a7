//! Decoding record data from wire format.
//!
//! Decoding starts at the record data length of a resource record inside a
//! DNS message and takes exactly as many octets as that length promises,
//! plus the two octets of the length itself. The data is checked against
//! the schema of the record type and the shape rules of its fields before
//! any of its domain names are added to the name table. If anything goes
//! wrong, neither the parser nor the name table are changed.

use super::field::{FieldKind, Format};
use super::record::{Fields, NameRepr, Rdata};
use super::registry::{lookup_type, TypeDescriptor};
use super::{apl, bitmap, loc, svcb};
use crate::base::iana::Rtype;
use crate::base::name::{Name, NameId, NameTable};
use crate::base::wire::{DecodeError, FormError};
use octseq::parse::Parser;
use std::vec::Vec;
use tracing::{debug, trace};

//------------ Decoding ------------------------------------------------------

/// Decodes the record data of a record of the given type.
///
/// The parser needs to be positioned at the record data length field of
/// the record and must cover the complete message, since compressed
/// domain names may refer to any earlier part of it.
///
/// On success, returns the record data and the number of octets taken
/// from the parser and advances the parser past the record data.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] if the parser ends before the end
/// of the record data and [`DecodeError::Malformed`] if the record data
/// doesn’t have the shape its type requires.
pub fn parse_rdata<Octs: AsRef<[u8]> + ?Sized>(
    rtype: Rtype,
    parser: &mut Parser<'_, Octs>,
    names: &mut NameTable,
) -> Result<(Rdata, usize), DecodeError> {
    lookup_type(rtype).decode(parser, names)
}

impl TypeDescriptor {
    /// Decodes record data of this type.
    ///
    /// See [`parse_rdata`] for details.
    pub fn decode<Octs: AsRef<[u8]> + ?Sized>(
        &self,
        parser: &mut Parser<'_, Octs>,
        names: &mut NameTable,
    ) -> Result<(Rdata, usize), DecodeError> {
        let mut tmp = *parser;
        let res = self.decode_window(&mut tmp);
        let (mut data, pending) = match res {
            Ok(some) => some,
            Err(DecodeError::Truncated) => {
                trace!(rtype = %self.rtype, "truncated record data");
                return Err(DecodeError::Truncated);
            }
            Err(DecodeError::Malformed(err)) => {
                debug!(
                    rtype = %self.rtype,
                    reason = %err,
                    "malformed record data"
                );
                return Err(DecodeError::Malformed(err));
            }
        };

        // Everything is fine. Only now can we touch the name table.
        for (pos, name) in pending {
            let id = names.intern(&name);
            data[pos..pos + NameId::COMPOSE_LEN]
                .copy_from_slice(&id.to_bytes());
        }
        let consumed = tmp.pos() - parser.pos();
        *parser = tmp;
        Ok((Rdata::from_parts(self.rtype, data.into_boxed_slice()), consumed))
    }

    /// Takes the record data length and the record data from `parser`.
    ///
    /// Returns the in-memory data with zeroed out handles and the names
    /// that still need to be interned, together with the position of their
    /// handles.
    fn decode_window<Octs: AsRef<[u8]> + ?Sized>(
        &self,
        parser: &mut Parser<'_, Octs>,
    ) -> Result<(Vec<u8>, Vec<(usize, Name)>), DecodeError> {
        let rdlen = usize::from(parser.parse_u16_be()?);
        let mut window = parser.parse_parser(rdlen)?;
        let mut data = Vec::with_capacity(rdlen);
        let mut pending = Vec::new();
        let mut gateway = None;

        for field in self.fields {
            if window.remaining() == 0 && field.optional {
                break;
            }
            let start = data.len();
            match field.kind {
                FieldKind::CompressedName => {
                    let name = Name::parse_compressed(&mut window)
                        .map_err(FormError::from)?;
                    pending.push((start, name));
                    data.extend_from_slice(&[0; NameId::COMPOSE_LEN]);
                }
                FieldKind::UncompressedName => {
                    let name = Name::parse_uncompressed(&mut window)
                        .map_err(FormError::from)?;
                    pending.push((start, name));
                    data.extend_from_slice(&[0; NameId::COMPOSE_LEN]);
                }
                FieldKind::LiteralName => {
                    take_literal_name(&mut window, &mut data)?;
                }
                FieldKind::String => {
                    take_string(&mut window, &mut data)?;
                }
                FieldKind::StringSequence => {
                    while window.remaining() > 0 {
                        take_string(&mut window, &mut data)?;
                    }
                }
                FieldKind::IpsecGateway => match gateway {
                    Some(0) => {}
                    Some(1) => take(&mut window, 4, &mut data)?,
                    Some(2) => take(&mut window, 16, &mut data)?,
                    Some(3) => take_literal_name(&mut window, &mut data)?,
                    _ => {
                        return Err(
                            FormError::new("invalid gateway type").into()
                        )
                    }
                },
                FieldKind::Binary
                | FieldKind::AddressPrefixList
                | FieldKind::SvcParams => {
                    let len = window.remaining();
                    take(&mut window, len, &mut data)?;
                }
                FieldKind::Byte
                | FieldKind::Short
                | FieldKind::Long
                | FieldKind::Ipv4
                | FieldKind::Ipv6
                | FieldKind::Ilnp64
                | FieldKind::Eui48
                | FieldKind::Eui64 => {
                    let len = field
                        .kind
                        .fixed_len()
                        .ok_or(FormError::new("unsized field"))?;
                    take(&mut window, len, &mut data)?;
                }
            }
            check_field(field.format, &data[start..])?;
            if field.format == Format::GatewayType {
                gateway = data.get(start).copied();
            }
        }
        if window.remaining() != 0 {
            return Err(FormError::new("trailing data").into());
        }
        Ok((data, pending))
    }
}

impl Rdata {
    /// Decodes record data from its uncompressed wire format.
    ///
    /// The slice has to contain exactly the record data without the
    /// preceding length. Since there is no message, compressed names are
    /// rejected.
    pub fn from_wire(
        rtype: Rtype,
        rdata: &[u8],
        names: &mut NameTable,
    ) -> Result<Self, DecodeError> {
        let len = u16::try_from(rdata.len())
            .map_err(|_| FormError::new("long record data"))?;
        let mut buf = Vec::with_capacity(rdata.len() + 2);
        buf.extend_from_slice(&len.to_be_bytes());
        buf.extend_from_slice(rdata);
        let mut parser = Parser::from_ref(buf.as_slice());

        // Without a message, there is nothing a pointer could refer to.
        let desc = lookup_type(rtype);
        if desc.fields.iter().any(|f| f.kind == FieldKind::CompressedName) {
            let mut wire = Fields::new(desc.fields, rdata, NameRepr::Wire);
            if let Some(Err(err)) = wire.find(Result::is_err) {
                return Err(err.into());
            }
        }
        desc.decode(&mut parser, names).map(|(rdata, _)| rdata)
    }
}

//------------ Shape Rules ---------------------------------------------------

/// Checks the shape of a field beyond its wire encoding.
///
/// `data` is the field as it appears in the in-memory data, which for the
/// formats this applies to is the same as in wire format.
pub(crate) fn check_field(
    format: Format,
    data: &[u8],
) -> Result<(), FormError> {
    match format {
        Format::TextSequence if data.is_empty() => {
            Err(FormError::new("missing character string"))
        }
        Format::Base32 if data.len() < 2 => {
            Err(FormError::new("empty hashed owner name"))
        }
        Format::Nsap if data.is_empty() => {
            Err(FormError::new("empty NSAP address"))
        }
        Format::Services if data.is_empty() => {
            Err(FormError::new("missing WKS protocol"))
        }
        Format::GatewayType => match data {
            [0..=3] => Ok(()),
            _ => Err(FormError::new("invalid gateway type")),
        },
        Format::Tag => {
            let tag = data.get(1..).unwrap_or_default();
            if tag.is_empty() || !tag.iter().all(u8::is_ascii_alphanumeric) {
                Err(FormError::new("invalid CAA tag"))
            } else {
                Ok(())
            }
        }
        Format::NxtBitmap => bitmap::check_nxt(data),
        Format::NsecBitmap => bitmap::check_windows(data),
        Format::Loc => loc::check(data),
        Format::Apl => apl::check(data),
        Format::SvcParams => svcb::check(data),
        _ => Ok(()),
    }
}

//------------ Helper Functions ----------------------------------------------

/// The error for running out of data inside the record data.
fn short() -> DecodeError {
    FormError::new("short record data").into()
}

/// Appends the next `len` octets from `parser` to `data`.
fn take<Octs: AsRef<[u8]> + ?Sized>(
    parser: &mut Parser<'_, Octs>,
    len: usize,
    data: &mut Vec<u8>,
) -> Result<(), DecodeError> {
    data.extend_from_slice(parser.peek(len).map_err(|_| short())?);
    parser.advance(len).map_err(|_| short())
}

/// Appends a length-prefixed character string.
fn take_string<Octs: AsRef<[u8]> + ?Sized>(
    parser: &mut Parser<'_, Octs>,
    data: &mut Vec<u8>,
) -> Result<(), DecodeError> {
    let len = parser.parse_u8().map_err(|_| short())?;
    data.push(len);
    take(parser, usize::from(len), data)
}

/// Appends an uncompressed name in its original case.
fn take_literal_name<Octs: AsRef<[u8]> + ?Sized>(
    parser: &mut Parser<'_, Octs>,
    data: &mut Vec<u8>,
) -> Result<(), DecodeError> {
    let name = Name::parse_uncompressed(parser).map_err(FormError::from)?;
    data.extend_from_slice(name.as_slice());
    Ok(())
}

//============ Testing =======================================================
