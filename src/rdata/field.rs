//! The vocabulary record data is described with.
//!
//! The record data of every record type is a sequence of fields. Each field
//! has a [`FieldKind`] describing how it is encoded in wire format and how
//! it is kept in memory, and a [`Format`] describing how it is converted
//! into presentation format. Kinds that consume the remainder of the
//! record data may only appear as the last field of a type.

use core::fmt;

//------------ FieldKind -----------------------------------------------------

/// The wire encoding of a record data field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    /// A domain name that may be compressed on the wire.
    ///
    /// Kept in memory as a name table handle.
    CompressedName,

    /// A domain name that must never be compressed.
    ///
    /// Kept in memory as a name table handle.
    UncompressedName,

    /// A domain name that is neither compressed nor canonicalized.
    ///
    /// Kept in memory inline in wire format, preserving its case.
    LiteralName,

    /// An 8 bit integer.
    Byte,

    /// A 16 bit integer in network byte order.
    Short,

    /// A 32 bit integer in network byte order.
    Long,

    /// A character string preceded by its length octet.
    String,

    /// One or more character strings filling the remainder.
    StringSequence,

    /// An IPv4 address.
    Ipv4,

    /// An IPv6 address.
    Ipv6,

    /// Untyped octets filling the remainder.
    Binary,

    /// A sequence of APL items filling the remainder.
    AddressPrefixList,

    /// The gateway of an IPSECKEY record.
    ///
    /// Its shape depends on the gateway type field that precedes it.
    IpsecGateway,

    /// A 64 bit ILNP node identifier or locator.
    Ilnp64,

    /// A 48 bit extended unique identifier.
    Eui48,

    /// A 64 bit extended unique identifier.
    Eui64,

    /// A sequence of service binding parameters filling the remainder.
    SvcParams,
}

impl FieldKind {
    /// Returns the width of kinds that always have the same size.
    #[must_use]
    pub const fn fixed_len(self) -> Option<usize> {
        match self {
            FieldKind::Byte => Some(1),
            FieldKind::Short => Some(2),
            FieldKind::Long | FieldKind::Ipv4 => Some(4),
            FieldKind::Ipv6 => Some(16),
            FieldKind::Ilnp64 | FieldKind::Eui64 => Some(8),
            FieldKind::Eui48 => Some(6),
            _ => None,
        }
    }

    /// Returns whether the kind consumes the remainder of the data.
    #[must_use]
    pub const fn is_remainder(self) -> bool {
        matches!(
            self,
            FieldKind::StringSequence
                | FieldKind::Binary
                | FieldKind::AddressPrefixList
                | FieldKind::SvcParams
        )
    }

    /// Returns whether the kind is kept in memory as a name table handle.
    #[must_use]
    pub const fn is_handle(self) -> bool {
        matches!(
            self,
            FieldKind::CompressedName | FieldKind::UncompressedName
        )
    }
}

//--- Display

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

//------------ Format --------------------------------------------------------

/// The presentation format of a record data field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// A domain name.
    Name,

    /// A quoted character string.
    Text,

    /// A sequence of quoted character strings.
    TextSequence,

    /// Decimal integers of the respective width.
    Byte,
    Short,
    Long,

    /// The gateway type of an IPSECKEY record, printed in decimal.
    GatewayType,

    /// Addresses in their usual notation.
    Ipv4,
    Ipv6,

    /// A record type mnemonic.
    Rtype,

    /// A DNSSEC algorithm number.
    Algorithm,

    /// A certificate type mnemonic.
    CertType,

    /// A time period in seconds.
    Period,

    /// A timestamp as `YYYYMMDDHHmmSS`.
    Time,

    /// Base 64 encoded octets, `0` if empty.
    Base64,

    /// Length prefixed base32hex encoded octets, which must not be empty.
    Base32,

    /// Hex encoded octets, `0` if empty.
    Hex,

    /// Length prefixed hex encoded octets, `-` if empty.
    HexLen,

    /// An NSAP address as `0x` followed by hex digits.
    Nsap,

    /// APL items.
    Apl,

    /// An IPSECKEY gateway.
    IpsecGateway,

    /// The protocol and services of a WKS record.
    Services,

    /// The type bitmap of an NXT record.
    NxtBitmap,

    /// The type bitmap of NSEC, NSEC3 and CSYNC records.
    NsecBitmap,

    /// The location of a LOC record.
    Loc,

    /// ILNP identifiers as four groups of hex digits.
    Ilnp64,

    /// EUI addresses as dash separated hex octets.
    Eui48,
    Eui64,

    /// A quoted character string filling the remainder.
    LongText,

    /// A CAA property tag.
    Tag,

    /// Service binding parameters.
    SvcParams,

    /// The generic format for unknown record data.
    Generic,
}

impl Format {
    /// Returns whether the format is a list that may have no items.
    ///
    /// An empty list is left out of the presentation format entirely,
    /// including the space that would separate it from the field before.
    /// Every other format has to produce output.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(
            self,
            Format::Apl
                | Format::NxtBitmap
                | Format::NsecBitmap
                | Format::SvcParams
        )
    }
}

//------------ Field ---------------------------------------------------------

/// One field of the record data of a record type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Field {
    /// The wire encoding of the field.
    pub kind: FieldKind,

    /// The presentation format of the field.
    pub format: Format,

    /// Whether the record data may end before this field.
    pub optional: bool,
}

impl Field {
    /// Creates a mandatory field.
    #[must_use]
    pub const fn new(kind: FieldKind, format: Format) -> Self {
        Field {
            kind,
            format,
            optional: false,
        }
    }

    /// Creates a field the record data may end before.
    #[must_use]
    pub const fn optional(kind: FieldKind, format: Format) -> Self {
        Field {
            kind,
            format,
            optional: true,
        }
    }

    pub const COMPRESSED_NAME: Self =
        Self::new(FieldKind::CompressedName, Format::Name);
    pub const UNCOMPRESSED_NAME: Self =
        Self::new(FieldKind::UncompressedName, Format::Name);
    pub const LITERAL_NAME: Self =
        Self::new(FieldKind::LiteralName, Format::Name);
    pub const BYTE: Self = Self::new(FieldKind::Byte, Format::Byte);
    pub const SHORT: Self = Self::new(FieldKind::Short, Format::Short);
    pub const LONG: Self = Self::new(FieldKind::Long, Format::Long);
    pub const TEXT: Self = Self::new(FieldKind::String, Format::Text);
    pub const TEXTS: Self =
        Self::new(FieldKind::StringSequence, Format::TextSequence);
    pub const IPV4: Self = Self::new(FieldKind::Ipv4, Format::Ipv4);
    pub const IPV6: Self = Self::new(FieldKind::Ipv6, Format::Ipv6);
    pub const ALGORITHM: Self = Self::new(FieldKind::Byte, Format::Algorithm);
    pub const BASE64: Self = Self::new(FieldKind::Binary, Format::Base64);
    pub const HEX: Self = Self::new(FieldKind::Binary, Format::Hex);
    pub const HEXLEN: Self = Self::new(FieldKind::String, Format::HexLen);
    pub const NSEC_BITMAP: Self =
        Self::new(FieldKind::Binary, Format::NsecBitmap);
    pub const GENERIC: Self = Self::new(FieldKind::Binary, Format::Generic);
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(FieldKind::Ipv6.fixed_len(), Some(16));
        assert_eq!(FieldKind::String.fixed_len(), None);
        assert!(FieldKind::SvcParams.is_remainder());
        assert!(!FieldKind::IpsecGateway.is_remainder());
        assert!(FieldKind::UncompressedName.is_handle());
        assert!(!FieldKind::LiteralName.is_handle());
    }

    #[test]
    fn lists() {
        assert!(Format::SvcParams.is_list());
        assert!(Format::NsecBitmap.is_list());
        assert!(Format::Apl.is_list());
        assert!(!Format::HexLen.is_list());
        assert!(!Format::TextSequence.is_list());
    }
}
