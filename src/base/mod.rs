//! Basics.
//!
//! This module provides the fundamental types the record data codec is
//! built from.
//!
//!
//! ## Parsing and Composing
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format data from other forms of representation conversion such as
//! producing zone file text, we use the term *parsing* for extracting data
//! from a wire-format representation and *composing* for producing such a
//! representation.
//!
//! Parsing happens through an [`octseq::parse::Parser`] over a buffer
//! holding the complete DNS message. This is necessary because compressed
//! domain names may reference any earlier part of the message. Composing
//! happens into a [`Sink`], which is positioned relative to the start of
//! the outgoing message for the same reason.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data arranged in
//! submodules. These are:
//!
//! * [iana] for the registries of record types, classes, and other
//!   parameters,
//! * [name] for domain names, the name table records refer to, and name
//!   compression,
//! * [wire] for the sink abstraction and the error types of the codec.

pub use self::iana::{Class, Rtype};
pub use self::name::{Name, NameId, NameTable};
pub use self::wire::{DecodeError, FormError, Sink};

pub mod iana;
pub mod name;
pub mod serde;
pub mod wire;
