//! In-memory record data.

use super::field::{Field, FieldKind, Format};
use super::registry::{lookup_type, TypeDescriptor};
use crate::base::iana::Rtype;
use crate::base::name::{Name, NameId, NameTable};
use crate::base::wire::FormError;
use core::fmt;
use std::boxed::Box;

//------------ Rdata ---------------------------------------------------------

/// The record data of a resource record kept in memory.
///
/// The data is kept in the order of the fields of its type. Most fields
/// look exactly as they do in wire format. Domain names of the compressed
/// and uncompressed kinds, however, are replaced by the four octet handle
/// of the name in a [`NameTable`]. The length of the data therefore says
/// little about the length of the record data on the wire, which depends
/// on whether and how well the names can be compressed.
///
/// Values are only ever created by decoding wire data, so the data always
/// has the shape its type demands.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Rdata {
    /// The record type.
    rtype: Rtype,

    /// The canonicalized data.
    data: Box<[u8]>,
}

impl Rdata {
    /// Creates a value from already validated data.
    pub(crate) fn from_parts(rtype: Rtype, data: Box<[u8]>) -> Self {
        Rdata { rtype, data }
    }

    /// Returns the record type.
    #[must_use]
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the descriptor of the record type.
    #[must_use]
    pub fn descriptor(&self) -> TypeDescriptor {
        lookup_type(self.rtype)
    }

    /// Returns the in-memory data.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the length of the in-memory data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the in-memory data is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an iterator over the fields of the data.
    pub fn fields(&self) -> Fields<'_> {
        Fields::new(self.descriptor().fields, &self.data, NameRepr::Handle)
    }

    /// Returns an iterator over the handles of the names in the data.
    pub fn names(&self) -> impl Iterator<Item = NameId> + '_ {
        self.fields().filter_map(|item| match item {
            Ok((field, data)) if field.kind.is_handle() => {
                NameId::from_slice(data)
            }
            _ => None,
        })
    }

    /// Gives back the names used by the data to the name table.
    ///
    /// This needs to happen once for every value that is being discarded
    /// while the table lives on.
    pub fn release(self, names: &mut NameTable) {
        for id in self.names() {
            names.release(id);
        }
    }
}

//--- Debug

impl fmt::Debug for Rdata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rdata")
            .field("rtype", &self.rtype)
            .field("data", &self.data)
            .finish()
    }
}

//------------ NameRepr ------------------------------------------------------

/// How names of the handle kinds are represented in data being walked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NameRepr {
    /// As four octet handles into a name table.
    Handle,

    /// In uncompressed wire format.
    Wire,
}

//------------ Fields --------------------------------------------------------

/// An iterator over the fields of record data.
///
/// The iterator returns each field of the schema of the record type
/// together with the octets it occupies. If the data doesn’t fit the
/// schema, an error is returned once and the iteration ends.
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    /// The fields still to come.
    schema: &'static [Field],

    /// The complete data.
    data: &'a [u8],

    /// The position of the next field in `data`.
    pos: usize,

    /// How names are represented.
    names: NameRepr,

    /// The gateway type of an IPSECKEY record, once seen.
    gateway: Option<u8>,

    /// Whether we are done.
    done: bool,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(
        schema: &'static [Field],
        data: &'a [u8],
        names: NameRepr,
    ) -> Self {
        Fields {
            schema,
            data,
            pos: 0,
            names,
            gateway: None,
            done: false,
        }
    }

    /// Returns the length of the next field of the given kind.
    fn field_len(
        &self,
        kind: FieldKind,
        data: &[u8],
    ) -> Result<usize, FormError> {
        let len = match kind {
            FieldKind::CompressedName | FieldKind::UncompressedName => {
                match self.names {
                    NameRepr::Handle => NameId::COMPOSE_LEN,
                    NameRepr::Wire => name_len(data)?,
                }
            }
            FieldKind::LiteralName => name_len(data)?,
            FieldKind::String => match data.first() {
                Some(&len) => usize::from(len) + 1,
                None => return Err(FormError::new("short character string")),
            },
            FieldKind::IpsecGateway => match self.gateway {
                Some(0) => 0,
                Some(1) => 4,
                Some(2) => 16,
                Some(3) => name_len(data)?,
                _ => return Err(FormError::new("invalid gateway type")),
            },
            FieldKind::StringSequence
            | FieldKind::Binary
            | FieldKind::AddressPrefixList
            | FieldKind::SvcParams => data.len(),
            FieldKind::Byte
            | FieldKind::Short
            | FieldKind::Long
            | FieldKind::Ipv4
            | FieldKind::Ipv6
            | FieldKind::Ilnp64
            | FieldKind::Eui48
            | FieldKind::Eui64 => match kind.fixed_len() {
                Some(len) => len,
                None => return Err(FormError::new("unsized field")),
            },
        };
        if len > data.len() {
            return Err(FormError::new("short field"));
        }
        Ok(len)
    }
}

impl<'a> Iterator for Fields<'a> {
    type Item = Result<(Field, &'a [u8]), FormError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let data: &'a [u8] = self.data;
        let data = &data[self.pos..];
        let (field, tail) = match self.schema.split_first() {
            Some(some) => some,
            None => {
                self.done = true;
                if data.is_empty() {
                    return None;
                }
                return Some(Err(FormError::new("trailing data")));
            }
        };
        if data.is_empty() && field.optional {
            self.done = true;
            return None;
        }
        let len = match self.field_len(field.kind, data) {
            Ok(len) => len,
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        };
        let data = &data[..len];
        if field.format == Format::GatewayType {
            self.gateway = data.first().copied();
        }
        self.pos += len;
        self.schema = tail;
        Some(Ok((*field, data)))
    }
}

//------------ Helper Functions ----------------------------------------------

/// Returns the length of the uncompressed name at the start of `data`.
pub(crate) fn name_len(data: &[u8]) -> Result<usize, FormError> {
    let mut pos = 0;
    loop {
        let len = match data.get(pos) {
            Some(&len) => usize::from(len),
            None => return Err(FormError::new("short domain name")),
        };
        if len > Name::MAX_LABEL_LEN {
            return Err(FormError::new("compressed or invalid label"));
        }
        pos += len + 1;
        if pos > Name::MAX_LEN {
            return Err(FormError::new("long domain name"));
        }
        if len == 0 {
            return Ok(pos);
        }
    }
}

//============ Testing =======================================================
