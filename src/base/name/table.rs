//! Interning of domain names.

use super::Name;
use core::fmt;
use std::collections::HashMap;
use std::vec::Vec;

//------------ NameId --------------------------------------------------------

/// A handle to a name interned in a [`NameTable`].
///
/// In-memory record data stores names as handles in their four octet big
/// endian form. A handle is only meaningful for the table that issued it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NameId(u32);

impl NameId {
    /// The size of a handle inside in-memory record data.
    pub const COMPOSE_LEN: usize = 4;

    /// Creates a handle from its raw value.
    #[must_use]
    pub const fn from_int(value: u32) -> Self {
        NameId(value)
    }

    /// Returns the raw value of the handle.
    #[must_use]
    pub const fn to_int(self) -> u32 {
        self.0
    }

    /// Returns the octets a handle is stored as.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Reads a handle from the beginning of `slice`.
    ///
    /// Returns `None` if the slice is too short.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        let bytes = slice.get(..Self::COMPOSE_LEN)?;
        Some(NameId(u32::from_be_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
        ])))
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//------------ NameTable -----------------------------------------------------

/// A table of reference counted domain names.
///
/// The table owns all names referenced by in-memory record data. Interning
/// a name that is already present, ignoring ASCII case, returns the
/// existing handle and increases its usage counter. The spelling of the
/// first interned name is kept.
///
/// The table is not synchronized. It is typically owned by a single zone
/// and only mutated while that zone is being loaded.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    /// The slots holding the names, indexed by handle.
    slots: Vec<Option<Slot>>,

    /// Handles of empty slots available for reuse.
    free: Vec<u32>,

    /// The handles for all names currently in the table.
    index: HashMap<Name, NameId>,
}

#[derive(Clone, Debug)]
struct Slot {
    name: Name,
    refs: usize,
}

impl NameTable {
    /// Creates a new, empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name and returns its handle.
    pub fn intern(&mut self, name: &Name) -> NameId {
        if let Some(&id) = self.index.get(name) {
            if let Some(slot) = self.slot_mut(id) {
                slot.refs += 1;
            }
            return id;
        }
        let slot = Slot {
            name: name.clone(),
            refs: 1,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Some(slot);
                NameId(idx)
            }
            None => {
                let idx = u32::try_from(self.slots.len())
                    .expect("more than 2^32 interned names");
                self.slots.push(Some(slot));
                NameId(idx)
            }
        };
        self.index.insert(name.clone(), id);
        id
    }

    /// Returns the name for a handle.
    #[must_use]
    pub fn resolve(&self, id: NameId) -> Option<&Name> {
        self.slots
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .map(|slot| &slot.name)
    }

    /// Drops one usage of a name.
    ///
    /// Once the last usage is gone, the name is removed and its handle may
    /// be reused. Returns whether the handle was known.
    pub fn release(&mut self, id: NameId) -> bool {
        let slot = match self.slot_mut(id) {
            Some(slot) => slot,
            None => return false,
        };
        slot.refs -= 1;
        if slot.refs == 0 {
            if let Some(slot) = self.slots[id.0 as usize].take() {
                self.index.remove(&slot.name);
            }
            self.free.push(id.0);
        }
        true
    }

    /// Returns how often a name is currently used.
    #[must_use]
    pub fn usage(&self, id: NameId) -> usize {
        self.slots
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .map_or(0, |slot| slot.refs)
    }

    /// Returns the number of distinct names in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn slot_mut(&mut self, id: NameId) -> Option<&mut Slot> {
        self.slots.get_mut(id.0 as usize).and_then(Option::as_mut)
    }
}

//============ Testing =======================================================
