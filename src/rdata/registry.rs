//! The registry of record types.
//!
//! Every record type this crate knows about has a [`TypeDescriptor`]
//! giving its mnemonic and the schema of its record data. All other types
//! share the generic descriptor which treats record data as opaque octets.
//!
//! The descriptors live in a static table indexed by type code. It covers
//! all codes up to and including AVC directly. DLV, the only type with a
//! higher code, is kept in the slot right after that range.

use super::field::{Field, FieldKind, Format};
use crate::base::iana::macros::parse_prefixed_decimal;
use crate::base::iana::{Class, Rtype};
use std::borrow::Cow;
use std::format;

//------------ TypeDescriptor ------------------------------------------------

/// The description of a record type.
#[derive(Clone, Copy, Debug)]
pub struct TypeDescriptor {
    /// The record type.
    pub rtype: Rtype,

    /// The mnemonic of the type or `None` for unknown types.
    pub name: Option<&'static str>,

    /// The fields of the record data in wire order.
    pub fields: &'static [Field],
}

impl TypeDescriptor {
    /// The descriptor for types without a specific schema.
    const fn generic(rtype: Rtype) -> Self {
        TypeDescriptor {
            rtype,
            name: None,
            fields: GENERIC,
        }
    }

    /// A descriptor for a known type.
    const fn known(rtype: Rtype, fields: &'static [Field]) -> Self {
        TypeDescriptor {
            rtype,
            name: rtype.to_mnemonic_str(),
            fields,
        }
    }

    /// Returns whether the type is known.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.name.is_some()
    }

    /// Returns whether the record data is treated as opaque octets.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        matches!(self.fields, [field] if field.format == Format::Generic)
    }

    /// Returns whether the record data contains name table handles.
    #[must_use]
    pub fn has_handles(&self) -> bool {
        self.fields.iter().any(|field| field.kind.is_handle())
    }
}

//------------ Lookup --------------------------------------------------------

/// The highest type code with its own slot in the table.
const LAST_CONTIGUOUS: u16 = 258;

/// The slot of the DLV type.
const DLV_SLOT: usize = LAST_CONTIGUOUS as usize + 1;

/// Returns the descriptor for a record type.
///
/// This never fails. Unknown types receive a generic descriptor.
#[must_use]
pub fn lookup_type(rtype: Rtype) -> TypeDescriptor {
    let code = rtype.to_int();
    if code <= LAST_CONTIGUOUS {
        TYPES[usize::from(code)]
    } else if rtype == Rtype::DLV {
        TYPES[DLV_SLOT]
    } else {
        TypeDescriptor::generic(rtype)
    }
}

/// Returns the type code for a textual type.
///
/// Known mnemonics are recognized ignoring case, as is the generic
/// `TYPEn` notation. If nothing matches, returns 0, which isn’t a valid
/// record type. Input starting with a digit and anything starting with
/// `IN` always results in 0 as these are TTLs and classes appearing in
/// the same position of a record in presentation format.
#[must_use]
pub fn type_from_name(name: &str) -> u16 {
    let bytes = name.as_bytes();
    match bytes {
        [b'0'..=b'9', ..] => return 0,
        [b'i' | b'I', b'n' | b'N', ..] => return 0,
        _ => {}
    }
    if let Some(rtype) = frequent_type(bytes) {
        return rtype.to_int();
    }
    for desc in TYPES.iter() {
        if let Some(mnemonic) = desc.name {
            if mnemonic.as_bytes().eq_ignore_ascii_case(bytes) {
                return desc.rtype.to_int();
            }
        }
    }
    parse_prefixed_decimal(bytes, b"TYPE").unwrap_or(0)
}

/// Resolves the types most often seen in zone files.
///
/// Dispatching on the first characters avoids scanning the table for the
/// bulk of records.
fn frequent_type(name: &[u8]) -> Option<Rtype> {
    let (&first, tail) = name.split_first()?;
    let tail_is = |s: &str| tail.eq_ignore_ascii_case(s.as_bytes());
    match first.to_ascii_uppercase() {
        b'R' if tail_is("RSIG") => Some(Rtype::RRSIG),
        b'N' if tail_is("S") => Some(Rtype::NS),
        b'N' if tail_is("SEC") => Some(Rtype::NSEC),
        b'N' if tail_is("SEC3") => Some(Rtype::NSEC3),
        b'N' if tail_is("SEC3PARAM") => Some(Rtype::NSEC3PARAM),
        b'D' if tail_is("S") => Some(Rtype::DS),
        b'D' if tail_is("NSKEY") => Some(Rtype::DNSKEY),
        b'A' if tail.is_empty() => Some(Rtype::A),
        b'A' if tail_is("AAA") => Some(Rtype::AAAA),
        b'S' if tail_is("OA") => Some(Rtype::SOA),
        b'T' if tail_is("XT") => Some(Rtype::TXT),
        _ => None,
    }
}

/// Returns the textual form of a record type.
///
/// This is the mnemonic for known types and `TYPEn` otherwise.
#[must_use]
pub fn type_to_string(rtype: Rtype) -> Cow<'static, str> {
    match lookup_type(rtype).name {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("TYPE{}", rtype.to_int())),
    }
}

/// Returns the class code for a textual class.
///
/// Recognizes the mnemonics and the generic `CLASSn` notation, ignoring
/// case. Returns 0 if nothing matches.
#[must_use]
pub fn class_from_name(name: &str) -> u16 {
    Class::from_bytes(name.as_bytes()).map_or(0, Class::to_int)
}

/// Returns the textual form of a class.
#[must_use]
pub fn class_to_string(class: Class) -> Cow<'static, str> {
    match class.to_mnemonic_str() {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(format!("CLASS{}", class.to_int())),
    }
}

//------------ Schemas -------------------------------------------------------

use self::FieldKind as K;

const fn f(kind: FieldKind, format: Format) -> Field {
    Field::new(kind, format)
}

const GENERIC: &[Field] = &[Field::GENERIC];
const ADDRESS: &[Field] = &[Field::IPV4];
const COMPRESSED_NAME: &[Field] = &[Field::COMPRESSED_NAME];
const UNCOMPRESSED_NAME: &[Field] = &[Field::UNCOMPRESSED_NAME];
const SOA: &[Field] = &[
    Field::COMPRESSED_NAME,
    Field::COMPRESSED_NAME,
    Field::LONG,
    f(K::Long, Format::Period),
    f(K::Long, Format::Period),
    f(K::Long, Format::Period),
    f(K::Long, Format::Period),
];
const WKS: &[Field] = &[Field::IPV4, f(K::Binary, Format::Services)];
const HINFO: &[Field] = &[Field::TEXT, Field::TEXT];
const MINFO: &[Field] = &[Field::COMPRESSED_NAME, Field::COMPRESSED_NAME];
const MX: &[Field] = &[Field::SHORT, Field::COMPRESSED_NAME];
const TEXTS: &[Field] = &[Field::TEXTS];
const RP: &[Field] = &[Field::UNCOMPRESSED_NAME, Field::UNCOMPRESSED_NAME];
const SHORT_NAME: &[Field] = &[Field::SHORT, Field::UNCOMPRESSED_NAME];
const X25: &[Field] = &[Field::TEXT];
const ISDN: &[Field] =
    &[Field::TEXT, Field::optional(K::String, Format::Text)];
const NSAP: &[Field] = &[f(K::Binary, Format::Nsap)];
const SIG: &[Field] = &[
    f(K::Short, Format::Rtype),
    Field::ALGORITHM,
    Field::BYTE,
    f(K::Long, Format::Period),
    f(K::Long, Format::Time),
    f(K::Long, Format::Time),
    Field::SHORT,
    Field::LITERAL_NAME,
    Field::BASE64,
];
const KEY: &[Field] =
    &[Field::SHORT, Field::BYTE, Field::ALGORITHM, Field::BASE64];
const PX: &[Field] = &[
    Field::SHORT,
    Field::UNCOMPRESSED_NAME,
    Field::UNCOMPRESSED_NAME,
];
const AAAA: &[Field] = &[Field::IPV6];
const LOC: &[Field] = &[f(K::Binary, Format::Loc)];
const NXT: &[Field] =
    &[Field::UNCOMPRESSED_NAME, f(K::Binary, Format::NxtBitmap)];
const SRV: &[Field] = &[
    Field::SHORT,
    Field::SHORT,
    Field::SHORT,
    Field::UNCOMPRESSED_NAME,
];
const NAPTR: &[Field] = &[
    Field::SHORT,
    Field::SHORT,
    Field::TEXT,
    Field::TEXT,
    Field::TEXT,
    Field::UNCOMPRESSED_NAME,
];
const CERT: &[Field] = &[
    f(K::Short, Format::CertType),
    Field::SHORT,
    Field::ALGORITHM,
    Field::BASE64,
];
const APL: &[Field] = &[f(K::AddressPrefixList, Format::Apl)];
const DS: &[Field] =
    &[Field::SHORT, Field::ALGORITHM, Field::BYTE, Field::HEX];
const SSHFP: &[Field] = &[Field::BYTE, Field::BYTE, Field::HEX];
const IPSECKEY: &[Field] = &[
    Field::BYTE,
    f(K::Byte, Format::GatewayType),
    Field::ALGORITHM,
    f(K::IpsecGateway, Format::IpsecGateway),
    Field::BASE64,
];
const NSEC: &[Field] = &[Field::LITERAL_NAME, Field::NSEC_BITMAP];
const BASE64: &[Field] = &[Field::BASE64];
const NSEC3: &[Field] = &[
    Field::BYTE,
    Field::BYTE,
    Field::SHORT,
    Field::HEXLEN,
    f(K::String, Format::Base32),
    Field::NSEC_BITMAP,
];
const NSEC3PARAM: &[Field] =
    &[Field::BYTE, Field::BYTE, Field::SHORT, Field::HEXLEN];
const TLSA: &[Field] = &[Field::BYTE, Field::BYTE, Field::BYTE, Field::HEX];
const CSYNC: &[Field] = &[Field::LONG, Field::SHORT, Field::NSEC_BITMAP];
const ZONEMD: &[Field] = &[Field::LONG, Field::BYTE, Field::BYTE, Field::HEX];
const SVCB: &[Field] = &[
    Field::SHORT,
    Field::UNCOMPRESSED_NAME,
    f(K::SvcParams, Format::SvcParams),
];
const ILNP64: &[Field] = &[Field::SHORT, f(K::Ilnp64, Format::Ilnp64)];
const L32: &[Field] = &[Field::SHORT, Field::IPV4];
const EUI48: &[Field] = &[f(K::Eui48, Format::Eui48)];
const EUI64: &[Field] = &[f(K::Eui64, Format::Eui64)];
const URI: &[Field] =
    &[Field::SHORT, Field::SHORT, f(K::Binary, Format::LongText)];
const CAA: &[Field] = &[
    Field::BYTE,
    f(K::String, Format::Tag),
    f(K::Binary, Format::LongText),
];

//------------ The Table -----------------------------------------------------

const KNOWN: &[TypeDescriptor] = &[
    TypeDescriptor::known(Rtype::A, ADDRESS),
    TypeDescriptor::known(Rtype::NS, COMPRESSED_NAME),
    TypeDescriptor::known(Rtype::MD, UNCOMPRESSED_NAME),
    TypeDescriptor::known(Rtype::MF, UNCOMPRESSED_NAME),
    TypeDescriptor::known(Rtype::CNAME, COMPRESSED_NAME),
    TypeDescriptor::known(Rtype::SOA, SOA),
    TypeDescriptor::known(Rtype::MB, COMPRESSED_NAME),
    TypeDescriptor::known(Rtype::MG, COMPRESSED_NAME),
    TypeDescriptor::known(Rtype::MR, COMPRESSED_NAME),
    TypeDescriptor::known(Rtype::NULL, GENERIC),
    TypeDescriptor::known(Rtype::WKS, WKS),
    TypeDescriptor::known(Rtype::PTR, COMPRESSED_NAME),
    TypeDescriptor::known(Rtype::HINFO, HINFO),
    TypeDescriptor::known(Rtype::MINFO, MINFO),
    TypeDescriptor::known(Rtype::MX, MX),
    TypeDescriptor::known(Rtype::TXT, TEXTS),
    TypeDescriptor::known(Rtype::RP, RP),
    TypeDescriptor::known(Rtype::AFSDB, SHORT_NAME),
    TypeDescriptor::known(Rtype::X25, X25),
    TypeDescriptor::known(Rtype::ISDN, ISDN),
    TypeDescriptor::known(Rtype::RT, SHORT_NAME),
    TypeDescriptor::known(Rtype::NSAP, NSAP),
    TypeDescriptor::known(Rtype::SIG, SIG),
    TypeDescriptor::known(Rtype::KEY, KEY),
    TypeDescriptor::known(Rtype::PX, PX),
    TypeDescriptor::known(Rtype::AAAA, AAAA),
    TypeDescriptor::known(Rtype::LOC, LOC),
    TypeDescriptor::known(Rtype::NXT, NXT),
    TypeDescriptor::known(Rtype::SRV, SRV),
    TypeDescriptor::known(Rtype::NAPTR, NAPTR),
    TypeDescriptor::known(Rtype::KX, SHORT_NAME),
    TypeDescriptor::known(Rtype::CERT, CERT),
    TypeDescriptor::known(Rtype::A6, GENERIC),
    TypeDescriptor::known(Rtype::DNAME, UNCOMPRESSED_NAME),
    TypeDescriptor::known(Rtype::OPT, GENERIC),
    TypeDescriptor::known(Rtype::APL, APL),
    TypeDescriptor::known(Rtype::DS, DS),
    TypeDescriptor::known(Rtype::SSHFP, SSHFP),
    TypeDescriptor::known(Rtype::IPSECKEY, IPSECKEY),
    TypeDescriptor::known(Rtype::RRSIG, SIG),
    TypeDescriptor::known(Rtype::NSEC, NSEC),
    TypeDescriptor::known(Rtype::DNSKEY, KEY),
    TypeDescriptor::known(Rtype::DHCID, BASE64),
    TypeDescriptor::known(Rtype::NSEC3, NSEC3),
    TypeDescriptor::known(Rtype::NSEC3PARAM, NSEC3PARAM),
    TypeDescriptor::known(Rtype::TLSA, TLSA),
    TypeDescriptor::known(Rtype::SMIMEA, TLSA),
    TypeDescriptor::known(Rtype::CDS, DS),
    TypeDescriptor::known(Rtype::CDNSKEY, KEY),
    TypeDescriptor::known(Rtype::OPENPGPKEY, BASE64),
    TypeDescriptor::known(Rtype::CSYNC, CSYNC),
    TypeDescriptor::known(Rtype::ZONEMD, ZONEMD),
    TypeDescriptor::known(Rtype::SVCB, SVCB),
    TypeDescriptor::known(Rtype::HTTPS, SVCB),
    TypeDescriptor::known(Rtype::SPF, TEXTS),
    TypeDescriptor::known(Rtype::NID, ILNP64),
    TypeDescriptor::known(Rtype::L32, L32),
    TypeDescriptor::known(Rtype::L64, ILNP64),
    TypeDescriptor::known(Rtype::LP, SHORT_NAME),
    TypeDescriptor::known(Rtype::EUI48, EUI48),
    TypeDescriptor::known(Rtype::EUI64, EUI64),
    TypeDescriptor::known(Rtype::URI, URI),
    TypeDescriptor::known(Rtype::CAA, CAA),
    TypeDescriptor::known(Rtype::AVC, TEXTS),
    TypeDescriptor::known(Rtype::DLV, DS),
];

/// The descriptor table indexed by type code.
static TYPES: [TypeDescriptor; DLV_SLOT + 1] = build_table();

const fn build_table() -> [TypeDescriptor; DLV_SLOT + 1] {
    let mut table =
        [TypeDescriptor::generic(Rtype::from_int(0)); DLV_SLOT + 1];
    let mut i = 0;
    while i < DLV_SLOT {
        table[i] = TypeDescriptor::generic(Rtype::from_int(i as u16));
        i += 1;
    }
    table[DLV_SLOT] = TypeDescriptor::generic(Rtype::DLV);

    let mut i = 0;
    while i < KNOWN.len() {
        let desc = KNOWN[i];
        let code = desc.rtype.to_int();
        let slot = if code <= LAST_CONTIGUOUS {
            code as usize
        } else {
            DLV_SLOT
        };
        table[slot] = desc;
        i += 1;
    }
    table
}

//============ Testing =======================================================
