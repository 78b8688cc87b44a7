//! Domain name compression for outgoing messages.

use super::Name;
use crate::base::wire::Sink;
use octseq::builder::ShortBuf;
use std::boxed::Box;
use std::collections::HashMap;
use tracing::trace;

//------------ NameOffsets ---------------------------------------------------

/// The positions of names already written to a message.
///
/// The table maps every name suffix that has been written in full to the
/// position of its first label. Lookups ignore ASCII case.
///
/// Because a compression pointer only has 14 bits for the offset, and
/// because offsets from 0x4000 upwards would collide with the pointer tag,
/// positions are only recorded while they are below 2^14. Names written
/// further into the message will be written in full every time.
#[derive(Clone, Debug, Default)]
pub struct NameOffsets {
    /// The recorded suffixes, lowercased, in wire format.
    map: HashMap<Box<[u8]>, u16>,

    /// Whether we have stopped recording because of the offset limit.
    capped: bool,
}

impl NameOffsets {
    /// The first position that will not be recorded anymore.
    pub const LIMIT: usize = 0x4000;

    /// Creates a new, empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position a suffix in wire format was written at.
    #[must_use]
    pub fn get(&self, suffix: &[u8]) -> Option<u16> {
        self.map.get(suffix.to_ascii_lowercase().as_slice()).copied()
    }

    /// Records the position of a suffix in wire format.
    ///
    /// Returns whether the position was recorded. It is not if it is at or
    /// beyond the limit or if the suffix is known already.
    pub fn insert(&mut self, suffix: &[u8], pos: usize) -> bool {
        let pos = match u16::try_from(pos) {
            Ok(pos) if usize::from(pos) < Self::LIMIT => pos,
            _ => {
                if !self.capped {
                    trace!(
                        position = pos,
                        "name offsets exhausted, no longer compressing"
                    );
                    self.capped = true;
                }
                return false;
            }
        };
        let key = suffix.to_ascii_lowercase().into_boxed_slice();
        if self.map.contains_key(&key) {
            return false;
        }
        self.map.insert(key, pos);
        true
    }

    /// Forgets about all positions at or beyond `pos`.
    pub fn truncate(&mut self, pos: usize) {
        self.map.retain(|_, &mut offset| usize::from(offset) < pos);
        if pos < Self::LIMIT {
            self.capped = false;
        }
    }

    /// Returns the number of recorded suffixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether no suffixes have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

//------------ Compressor ----------------------------------------------------

/// A sink that compresses domain names.
///
/// This type wraps around another sink and implements domain name
/// compression for names written via [`Sink::write_compressed_name`].
/// All other data is passed through.
///
/// The position of a domain name is calculated relative to the beginning of
/// the underlying sink. This means that this sink must represent the
/// message only. A compressor is meant for exactly one outgoing message and
/// must not be shared between messages.
#[derive(Clone, Debug)]
pub struct Compressor<Target> {
    /// The underlying sink.
    target: Target,

    /// The names we have encountered so far.
    offsets: NameOffsets,
}

impl<Target> Compressor<Target> {
    /// Creates a compressor atop a sink.
    pub fn new(target: Target) -> Self {
        Compressor {
            target,
            offsets: NameOffsets::new(),
        }
    }

    /// Returns a reference to the underlying sink.
    pub fn as_target(&self) -> &Target {
        &self.target
    }

    /// Converts the compressor into the underlying sink.
    pub fn into_target(self) -> Target {
        self.target
    }

    /// Returns a reference to the octets slice of the content.
    pub fn as_slice(&self) -> &[u8]
    where
        Target: AsRef<[u8]>,
    {
        self.target.as_ref()
    }

    /// Returns a reference to the table of known names.
    pub fn offsets(&self) -> &NameOffsets {
        &self.offsets
    }
}

//--- Sink

impl<Target: Sink> Sink for Compressor<Target> {
    fn position(&self) -> usize {
        self.target.position()
    }

    fn set_position(&mut self, pos: usize) -> Result<(), ShortBuf> {
        self.target.set_position(pos)?;
        self.offsets.truncate(pos);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> Result<(), ShortBuf> {
        self.target.write(data)
    }

    fn write_at(&mut self, pos: usize, data: &[u8]) -> Result<(), ShortBuf> {
        self.target.write_at(pos, data)
    }

    fn write_compressed_name(&mut self, name: &Name) -> Result<(), ShortBuf> {
        let wire = name.as_slice();
        for start in name.suffix_offsets() {
            let suffix = &wire[start..];

            // If we already know this suffix, finish with a pointer.
            if let Some(pos) = self.offsets.get(suffix) {
                return self.target.write_u16(pos | 0xC000);
            }

            // Otherwise write the label and remember where it went.
            let here = self.target.position();
            let end = start + usize::from(wire[start]) + 1;
            self.target.write(&wire[start..end])?;
            self.offsets.insert(suffix, here);
        }
        self.target.write(&[0])
    }
}

//--- AsRef

impl<Target: AsRef<[u8]>> AsRef<[u8]> for Compressor<Target> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//============ Testing =======================================================
