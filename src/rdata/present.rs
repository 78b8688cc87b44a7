//! Converting record data into presentation format.
//!
//! Each field is converted according to its [`Format`] and fields are
//! separated by a single space. If any field can’t be converted, the whole
//! record is given in the generic format of [RFC 3597] instead, i.e.,
//! `\#`, the length of the record data, and the record data in hex. The
//! same happens for all record types not known to the registry.
//!
//! [RFC 3597]: https://tools.ietf.org/html/rfc3597

use super::field::{Field, FieldKind, Format};
use super::parse::check_field;
use super::record::{Fields, NameRepr, Rdata};
use super::registry::{lookup_type, TypeDescriptor};
use super::{apl, bitmap, loc, svcb};
use crate::base::iana::{CertType, Rtype};
use crate::base::name::{Name, NameId, NameTable};
use crate::utils::{base16, base32, base64};
use core::fmt::{self, Write};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::string::String;
use tracing::trace;

//------------ Presenting Records --------------------------------------------

/// Appends the presentation format of record data to `out`.
///
/// Names are looked up in `names`, which has to be the table the record
/// data was decoded with.
pub fn present_rdata(rdata: &Rdata, names: &NameTable, out: &mut String) {
    rdata.descriptor().present(rdata, names, out)
}

/// Appends the presentation format of record data in wire format.
///
/// The data must not contain compressed names, as is the case for the
/// record data of all records outside of a message.
pub fn present_wire(rtype: Rtype, rdata: &[u8], out: &mut String) {
    let desc = lookup_type(rtype);
    if desc.is_generic() {
        return present_generic(rdata, out);
    }
    let start = out.len();
    let res = present_fields(
        Fields::new(desc.fields, rdata, NameRepr::Wire),
        None,
        out,
    );
    if res.is_err() {
        out.truncate(start);
        trace!(rtype = %rtype, "falling back to generic presentation");
        present_generic(rdata, out);
    }
}

/// Appends the generic presentation format of [RFC 3597] to `out`.
///
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
pub fn present_generic(rdata: &[u8], out: &mut String) {
    let _ = write!(out, "\\# {}", rdata.len());
    if !rdata.is_empty() {
        out.push(' ');
        base16::append(rdata, out);
    }
}

impl TypeDescriptor {
    /// Appends the presentation format of record data of this type.
    ///
    /// Data of a different type is presented in generic format.
    pub fn present(
        &self,
        rdata: &Rdata,
        names: &NameTable,
        out: &mut String,
    ) {
        let start = out.len();
        let res = if self.is_generic() || rdata.rtype() != self.rtype {
            Err(fmt::Error)
        } else {
            present_fields(rdata.fields(), Some(names), out)
        };
        if res.is_ok() {
            return;
        }
        out.truncate(start);
        if !self.is_generic() {
            trace!(
                rtype = %rdata.rtype(),
                "falling back to generic presentation"
            );
        }

        // The generic format wants wire format, so names need expanding.
        match rdata.to_wire(names) {
            Ok(wire) => present_generic(&wire, out),
            Err(_) => present_generic(rdata.as_slice(), out),
        }
    }
}

impl Rdata {
    /// Returns a value displaying the record data in presentation format.
    pub fn display<'a>(
        &'a self,
        names: &'a NameTable,
    ) -> impl fmt::Display + 'a {
        struct Display<'a>(&'a Rdata, &'a NameTable);

        impl<'a> fmt::Display for Display<'a> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let mut out = String::new();
                present_rdata(self.0, self.1, &mut out);
                f.write_str(&out)
            }
        }

        Display(self, names)
    }
}

//------------ Fields --------------------------------------------------------

/// Appends all fields, failing if any of them can’t be presented.
///
/// If `names` is `None`, names are expected in wire format.
fn present_fields(
    fields: Fields<'_>,
    names: Option<&NameTable>,
    out: &mut String,
) -> fmt::Result {
    let start = out.len();
    let mut gateway = None;
    for item in fields {
        let (field, data) = item.map_err(|_| fmt::Error)?;
        check_field(field.format, data).map_err(|_| fmt::Error)?;
        let mark = out.len();
        if mark > start {
            out.push(' ');
        }
        let content = out.len();
        present_field(field, data, names, gateway, out)?;
        if out.len() == content {
            if !field.format.is_list() {
                return Err(fmt::Error);
            }
            out.truncate(mark);
        }
        if field.format == Format::GatewayType {
            gateway = data.first().copied();
        }
    }
    Ok(())
}

/// Appends a single field.
fn present_field(
    field: Field,
    data: &[u8],
    names: Option<&NameTable>,
    gateway: Option<u8>,
    out: &mut String,
) -> fmt::Result {
    match field.format {
        Format::Name => present_name(field.kind, data, names, out),
        Format::Text => present_text(string_content(data)?, out),
        Format::TextSequence => {
            let mut data = data;
            let mut first = true;
            while let Some((&len, tail)) = data.split_first() {
                let len = usize::from(len);
                let text = tail.get(..len).ok_or(fmt::Error)?;
                if !first {
                    out.push(' ');
                }
                present_text(text, out)?;
                data = &tail[len..];
                first = false;
            }
            Ok(())
        }
        Format::LongText => present_text(data, out),
        Format::Byte | Format::GatewayType | Format::Algorithm => {
            write!(out, "{}", data.first().ok_or(fmt::Error)?)
        }
        Format::Short => write!(out, "{}", short(data)?),
        Format::Long | Format::Period => write!(out, "{}", long(data)?),
        Format::Rtype => write!(out, "{}", Rtype::from_int(short(data)?)),
        Format::CertType => {
            write!(out, "{}", CertType::from_int(short(data)?))
        }
        Format::Time => present_time(long(data)?, out),
        Format::Ipv4 => {
            let octets: [u8; 4] = data.try_into().map_err(|_| fmt::Error)?;
            write!(out, "{}", Ipv4Addr::from(octets))
        }
        Format::Ipv6 => {
            let octets: [u8; 16] = data.try_into().map_err(|_| fmt::Error)?;
            write!(out, "{}", Ipv6Addr::from(octets))
        }
        Format::Base64 => {
            if data.is_empty() {
                out.push('0');
            } else {
                base64::append(data, out);
            }
            Ok(())
        }
        Format::Base32 => {
            let data = string_content(data)?;
            if data.is_empty() {
                return Err(fmt::Error);
            }
            base32::append_hex(data, out);
            Ok(())
        }
        Format::Hex => {
            if data.is_empty() {
                out.push('0');
            } else {
                base16::append(data, out);
            }
            Ok(())
        }
        Format::HexLen => {
            let data = string_content(data)?;
            if data.is_empty() {
                out.push('-');
            } else {
                base16::append(data, out);
            }
            Ok(())
        }
        Format::Nsap => {
            out.push_str("0x");
            base16::append(data, out);
            Ok(())
        }
        Format::IpsecGateway => match gateway {
            Some(0) => {
                out.push('.');
                Ok(())
            }
            Some(1) => present_field(Field::IPV4, data, names, None, out),
            Some(2) => present_field(Field::IPV6, data, names, None, out),
            Some(3) => {
                present_field(Field::LITERAL_NAME, data, names, None, out)
            }
            _ => Err(fmt::Error),
        },
        Format::Services => {
            let (protocol, bits) = data.split_first().ok_or(fmt::Error)?;
            write!(out, "{}", protocol)?;
            for port in 0..bits.len() * 8 {
                if bits[port >> 3] & (0x80 >> (port & 0x07)) != 0 {
                    write!(out, " {}", port)?;
                }
            }
            Ok(())
        }
        Format::NxtBitmap => bitmap::present_nxt(data, out),
        Format::NsecBitmap => bitmap::present_windows(data, out),
        Format::Loc => loc::present(data, out),
        Format::Apl => apl::present(data, out),
        Format::SvcParams => svcb::present(data, out),
        Format::Ilnp64 => {
            if data.len() != 8 {
                return Err(fmt::Error);
            }
            for (i, chunk) in data.chunks(2).enumerate() {
                if i > 0 {
                    out.push(':');
                }
                let group = u16::from_be_bytes([chunk[0], chunk[1]]);
                write!(out, "{:04x}", group)?;
            }
            Ok(())
        }
        Format::Eui48 | Format::Eui64 => {
            for (i, octet) in data.iter().enumerate() {
                if i > 0 {
                    out.push('-');
                }
                write!(out, "{:02x}", octet)?;
            }
            Ok(())
        }
        Format::Tag => {
            let tag = string_content(data)?;
            if tag.is_empty()
                || !tag
                    .iter()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
            {
                return Err(fmt::Error);
            }
            tag.iter().for_each(|&ch| out.push(char::from(ch)));
            Ok(())
        }
        Format::Generic => Err(fmt::Error),
    }
}

/// Appends a domain name.
fn present_name(
    kind: FieldKind,
    data: &[u8],
    names: Option<&NameTable>,
    out: &mut String,
) -> fmt::Result {
    match names {
        Some(names) if kind.is_handle() => {
            let id = NameId::from_slice(data).ok_or(fmt::Error)?;
            let name = names.resolve(id).ok_or(fmt::Error)?;
            write!(out, "{}", name)
        }
        _ => {
            let name = Name::from_slice(data).map_err(|_| fmt::Error)?;
            write!(out, "{}", name)
        }
    }
}

/// Appends a quoted character string.
fn present_text(data: &[u8], out: &mut String) -> fmt::Result {
    out.push('"');
    for &ch in data {
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
    Ok(())
}

/// Appends a timestamp as `YYYYMMDDHHmmSS`.
fn present_time(value: u32, out: &mut String) -> fmt::Result {
    let time = time::OffsetDateTime::from_unix_timestamp(i64::from(value))
        .map_err(|_| fmt::Error)?;
    write!(
        out,
        "{:04}{:02}{:02}{:02}{:02}{:02}",
        time.year(),
        u8::from(time.month()),
        time.day(),
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Returns the content of a length-prefixed character string.
fn string_content(data: &[u8]) -> Result<&[u8], fmt::Error> {
    let (&len, tail) = data.split_first().ok_or(fmt::Error)?;
    if tail.len() != usize::from(len) {
        return Err(fmt::Error);
    }
    Ok(tail)
}

fn short(data: &[u8]) -> Result<u16, fmt::Error> {
    let octets: [u8; 2] = data.try_into().map_err(|_| fmt::Error)?;
    Ok(u16::from_be_bytes(octets))
}

fn long(data: &[u8]) -> Result<u32, fmt::Error> {
    let octets: [u8; 4] = data.try_into().map_err(|_| fmt::Error)?;
    Ok(u32::from_be_bytes(octets))
}

//============ Testing =======================================================
