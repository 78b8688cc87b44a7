//! Record data.
//!
//! This module implements the record data of all record types an
//! authoritative server needs to deal with. Rather than having a type for
//! each record type, record data is described by a schema, a list of
//! [fields][Field], and kept in memory in a single type, [`Rdata`]. The
//! schema of every known record type is available through
//! [`lookup_type`]. Record types that aren’t known are treated as opaque
//! octets.
//!
//! There are three operations on record data:
//!
//! * [`parse_rdata`] decodes record data from wire format, checking that it
//!   has exactly the shape its type demands. Domain names in the data are
//!   interned into a [`NameTable`] and the record data only keeps a handle.
//! * [`compose_rdata`] and [`compose_len_rdata`] encode record data into a
//!   [`Sink`], compressing names where allowed if the sink supports it.
//! * [`present_rdata`] produces the presentation format of record data,
//!   falling back to the generic format of RFC 3597 for record data that
//!   can’t be presented otherwise.
//!
//! [`NameTable`]: crate::base::name::NameTable
//! [`Sink`]: crate::base::wire::Sink

pub use self::compose::{compose_len_rdata, compose_rdata, ComposeError};
pub use self::field::{Field, FieldKind, Format};
pub use self::parse::parse_rdata;
pub use self::present::{present_generic, present_rdata, present_wire};
pub use self::record::{Fields, Rdata};
pub use self::registry::{
    class_from_name, class_to_string, lookup_type, type_from_name,
    type_to_string, TypeDescriptor,
};

pub mod apl;
pub mod bitmap;
pub mod loc;
pub mod svcb;

mod compose;
mod field;
mod parse;
mod present;
mod record;
mod registry;
