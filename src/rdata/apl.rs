//! Address prefix lists.
//!
//! The record data of the APL record of [RFC 3123] is a sequence of items
//! each consisting of a 16 bit address family, an eight bit prefix length,
//! a negation flag and seven bit length of the address part, and the
//! address part itself. Trailing zero octets of the address are dropped
//! from the address part.
//!
//! [RFC 3123]: https://tools.ietf.org/html/rfc3123

use crate::base::wire::FormError;
use core::fmt::{self, Write};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::string::String;

/// Address family number for IPv4.
const FAMILY_IPV4: u16 = 1;

/// Address family number for IPv6.
const FAMILY_IPV6: u16 = 2;

//------------ AplItem -------------------------------------------------------

/// A single item of an address prefix list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AplItem<'a> {
    /// The address family.
    pub family: u16,

    /// The prefix length.
    pub prefix: u8,

    /// Whether the item is negated.
    pub negated: bool,

    /// The address part without trailing zeros.
    pub address: &'a [u8],
}

impl<'a> AplItem<'a> {
    /// Returns the maximum prefix and address length for the family.
    fn limits(self) -> Option<(u8, usize)> {
        match self.family {
            FAMILY_IPV4 => Some((32, 4)),
            FAMILY_IPV6 => Some((128, 16)),
            _ => None,
        }
    }

    /// Checks that the item is valid.
    fn check(self) -> Result<(), FormError> {
        let (max_prefix, max_len) = self
            .limits()
            .ok_or(FormError::new("unknown APL address family"))?;
        if self.prefix > max_prefix {
            return Err(FormError::new("invalid APL prefix length"));
        }
        if self.address.len() > max_len {
            return Err(FormError::new("long APL address"));
        }
        if self.address.last() == Some(&0) {
            return Err(FormError::new("trailing zero in APL address"));
        }
        Ok(())
    }
}

//--- Display

impl<'a> fmt::Display for AplItem<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        let mut octets = [0u8; 16];
        let len = self.address.len().min(16);
        octets[..len].copy_from_slice(&self.address[..len]);
        match self.family {
            FAMILY_IPV4 => {
                let addr =
                    Ipv4Addr::new(octets[0], octets[1], octets[2], octets[3]);
                write!(f, "{}:{}/{}", self.family, addr, self.prefix)
            }
            FAMILY_IPV6 => {
                let addr = Ipv6Addr::from(octets);
                write!(f, "{}:{}/{}", self.family, addr, self.prefix)
            }
            _ => Err(fmt::Error),
        }
    }
}

//------------ AplIter -------------------------------------------------------

/// An iterator over the items of an address prefix list.
#[derive(Clone, Debug)]
pub struct AplIter<'a>(&'a [u8]);

impl<'a> AplIter<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        AplIter(data)
    }
}

impl<'a> Iterator for AplIter<'a> {
    type Item = Result<AplItem<'a>, FormError>;

    fn next(&mut self) -> Option<Self::Item> {
        let data = self.0;
        let (family, prefix, flags, tail) = match *data {
            [] => return None,
            [f1, f2, prefix, flags, ref tail @ ..] => {
                (u16::from_be_bytes([f1, f2]), prefix, flags, tail)
            }
            _ => {
                self.0 = &[];
                return Some(Err(FormError::new("short APL item")));
            }
        };
        let len = usize::from(flags & 0x7F);
        if tail.len() < len {
            self.0 = &[];
            return Some(Err(FormError::new("short APL item")));
        }
        let (address, tail) = tail.split_at(len);
        self.0 = tail;
        Some(Ok(AplItem {
            family,
            prefix,
            negated: flags & 0x80 != 0,
            address,
        }))
    }
}

//------------ Checking and Presentation -------------------------------------

/// Checks that `data` is a correctly encoded address prefix list.
///
/// An empty list is fine.
pub fn check(data: &[u8]) -> Result<(), FormError> {
    for item in AplIter::new(data) {
        item?.check()?;
    }
    Ok(())
}

/// Writes all items of the list separated by spaces.
pub fn present(data: &[u8], out: &mut String) -> fmt::Result {
    for (i, item) in AplIter::new(data).enumerate() {
        let item = item.map_err(|_| fmt::Error)?;
        item.check().map_err(|_| fmt::Error)?;
        if i > 0 {
            out.push(' ');
        }
        write!(out, "{}", item)?;
    }
    Ok(())
}

//============ Testing =======================================================
