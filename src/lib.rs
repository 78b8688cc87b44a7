//! Record data for authoritative DNS servers.
//!
//! This crate provides the part of a DNS server that deals with the record
//! data of resource records: it decodes record data from DNS messages into
//! a compact in-memory form, encodes it back into messages using name
//! compression, and converts it into presentation format for zone files
//! and logging.
//!
//! # Modules
//!
//! * [base] contains the fundamental types the codec is built from: the
//!   IANA registries for record types and classes, domain names together
//!   with the name table and name compression, and the [`Sink`]
//!   abstraction for writing wire data,
//! * [rdata] contains the registry of record types and the decoder,
//!   encoder, and presentation formatter for their data, and
//! * [utils] provides the textual encodings used by presentation format.
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables using `BytesMut` from the
//!    [bytes](https://github.com/tokio-rs/bytes) crate as a sink.
//! * `serde`: Enables serde serialization for a number of basic types.
//! * `std`: support for the Rust std library in the dependencies. This
//!   feature is enabled by default.
//!
//! [`Sink`]: crate::base::wire::Sink
#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod rdata;
pub mod utils;
