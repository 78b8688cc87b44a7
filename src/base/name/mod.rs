//! Domain names.
//!
//! This module provides [`Name`], an owned absolute domain name kept in
//! uncompressed wire format, together with the two collaborators the record
//! data codec needs around it: the [`NameTable`] that interns names
//! referenced by in-memory records, and the [`Compressor`] that replaces
//! repeated names in an outgoing message by compression pointers.
//!
//! Domain names are compared ignoring ASCII case throughout, as demanded by
//! [RFC 4343]. The original case of a name is preserved, though.
//!
//! [RFC 4343]: https://tools.ietf.org/html/rfc4343

pub use self::compressor::{Compressor, NameOffsets};
pub use self::table::{NameId, NameTable};

use core::{fmt, hash, str};
use octseq::parse::Parser;
use std::boxed::Box;
use std::vec::Vec;

mod compressor;
mod table;

//------------ Name ----------------------------------------------------------

/// An absolute domain name in uncompressed wire format.
///
/// The name consists of a sequence of labels, each preceded by its length
/// octet, and always ends in the empty root label. Since the underlying
/// octets have been checked upon creation, every value of this type is a
/// correctly encoded name of at most 255 octets.
#[derive(Clone)]
pub struct Name(Box<[u8]>);

impl Name {
    /// The maximum size of a domain name in wire format.
    pub const MAX_LEN: usize = 255;

    /// The maximum size of a single label, excluding its length octet.
    pub const MAX_LABEL_LEN: usize = 63;

    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Name(Box::new([0]))
    }

    /// Creates a domain name from an octets slice.
    ///
    /// # Errors
    ///
    /// This will only succeed if `slice` contains a properly encoded
    /// absolute domain name without compression pointers.
    pub fn from_slice(slice: &[u8]) -> Result<Self, NameError> {
        Self::check_slice(slice)?;
        Ok(Name(slice.into()))
    }

    /// Checks whether an octet slice contains a correctly encoded name.
    fn check_slice(mut slice: &[u8]) -> Result<(), NameError> {
        if slice.len() > Name::MAX_LEN {
            return Err(NameError(NameErrorEnum::LongName));
        }
        loop {
            let (&len, tail) = match slice.split_first() {
                Some(some) => some,
                None => return Err(NameError(NameErrorEnum::RelativeName)),
            };
            match len {
                0 => {
                    if tail.is_empty() {
                        return Ok(());
                    }
                    return Err(NameError(NameErrorEnum::TrailingData));
                }
                1..=0x3F => {
                    let len = usize::from(len);
                    if tail.len() < len {
                        return Err(NameError(NameErrorEnum::ShortInput));
                    }
                    slice = &tail[len..];
                }
                0xC0..=0xFF => {
                    return Err(NameError(NameErrorEnum::CompressedName))
                }
                _ => return Err(NameError(NameErrorEnum::BadLabel)),
            }
        }
    }

    /// Returns a reference to the underlying wire format octets.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the name in wire format.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the name is the root name.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Returns an iterator over the contents of the non-root labels.
    pub fn labels(&self) -> LabelIter<'_> {
        LabelIter(&self.0)
    }

    /// Returns the offsets of all labels that start a non-root suffix.
    ///
    /// The offsets are relative to the start of the name and are produced
    /// from the longest suffix, the name itself, to the shortest.
    pub fn suffix_offsets(&self) -> impl Iterator<Item = usize> + '_ {
        let mut pos = 0;
        self.labels().map(move |label| {
            let res = pos;
            pos += label.len() + 1;
            res
        })
    }
}

/// # Parsing
///
/// Both functions expect `parser` to be limited to the data a name may be
/// taken from and to be positioned at the first label. A short read is
/// reported as [`NameError`], which callers that have already checked the
/// overall length treat as malformed data.
impl Name {
    /// Takes a name that must not contain compression pointers.
    pub fn parse_uncompressed<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, NameError> {
        let mut buf = Vec::new();
        loop {
            let len = parser.parse_u8().map_err(|_| NameErrorEnum::ShortInput)?;
            match len {
                0 => {
                    buf.push(0);
                    return Ok(Name(buf.into_boxed_slice()));
                }
                1..=0x3F => {
                    append_label(&mut buf, parser, len)?;
                }
                0xC0..=0xFF => {
                    return Err(NameError(NameErrorEnum::CompressedName))
                }
                _ => return Err(NameError(NameErrorEnum::BadLabel)),
            }
        }
    }

    /// Takes a name that may end in a compression pointer.
    ///
    /// Pointers are followed through the complete message `parser` was
    /// created for. Every pointer has to point strictly before its own
    /// position. The parser itself is advanced past the first pointer or
    /// the root label, whichever comes first.
    pub fn parse_compressed<Octs: AsRef<[u8]> + ?Sized>(
        parser: &mut Parser<'_, Octs>,
    ) -> Result<Self, NameError> {
        let mut buf = Vec::new();

        // Phase One: labels are taken from `parser` itself.
        let mut ptr = loop {
            let ptr_pos = parser.pos();
            let len = parser.parse_u8().map_err(|_| NameErrorEnum::ShortInput)?;
            match len {
                0 => {
                    buf.push(0);
                    return Ok(Name(buf.into_boxed_slice()));
                }
                1..=0x3F => append_label(&mut buf, parser, len)?,
                0xC0..=0xFF => break parse_pointer(parser, len, ptr_pos)?,
                _ => return Err(NameError(NameErrorEnum::BadLabel)),
            }
        };

        // Phase Two: compression has occured.
        //
        // We continue on a parser for the whole message because the target
        // can be anywhere before the pointer.
        let mut parser = Parser::from_ref(parser.octets_ref());
        loop {
            parser
                .seek(ptr)
                .map_err(|_| NameError(NameErrorEnum::BadPointer))?;
            loop {
                let ptr_pos = parser.pos();
                let len =
                    parser.parse_u8().map_err(|_| NameErrorEnum::ShortInput)?;
                match len {
                    0 => {
                        buf.push(0);
                        return Ok(Name(buf.into_boxed_slice()));
                    }
                    1..=0x3F => append_label(&mut buf, &mut parser, len)?,
                    0xC0..=0xFF => {
                        ptr = parse_pointer(&mut parser, len, ptr_pos)?;
                        break;
                    }
                    _ => return Err(NameError(NameErrorEnum::BadLabel)),
                }
            }
        }
    }
}

/// Appends a label of `len` octets taken from `parser` to `buf`.
fn append_label<Octs: AsRef<[u8]> + ?Sized>(
    buf: &mut Vec<u8>,
    parser: &mut Parser<'_, Octs>,
    len: u8,
) -> Result<(), NameError> {
    // The root label still needs to fit.
    if buf.len() + usize::from(len) + 2 > Name::MAX_LEN {
        return Err(NameError(NameErrorEnum::LongName));
    }
    let content = parser
        .peek(usize::from(len))
        .map_err(|_| NameErrorEnum::ShortInput)?;
    buf.push(len);
    buf.extend_from_slice(content);
    parser
        .advance(usize::from(len))
        .map_err(|_| NameErrorEnum::ShortInput)?;
    Ok(())
}

/// Takes the second octet of a pointer and checks where it points to.
fn parse_pointer<Octs: AsRef<[u8]> + ?Sized>(
    parser: &mut Parser<'_, Octs>,
    first: u8,
    ptr_pos: usize,
) -> Result<usize, NameError> {
    let low = parser.parse_u8().map_err(|_| NameErrorEnum::ShortInput)?;
    let ptr = usize::from(u16::from_be_bytes([first & 0x3F, low]));
    if ptr >= ptr_pos {
        return Err(NameError(NameErrorEnum::BadPointer));
    }
    Ok(ptr)
}

//--- FromStr

impl str::FromStr for Name {
    type Err = NameError;

    /// Parses a domain name in presentation format.
    ///
    /// Labels are separated by dots. Dots, backslashes and other special
    /// characters can be escaped with a backslash and any octet can be
    /// given as a backslash followed by exactly three decimal digits. The
    /// name is always absolute, a missing trailing dot is quietly added.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Name::root());
        }
        let mut buf = Vec::with_capacity(s.len() + 2);
        let mut label_start = 0;
        buf.push(0);
        let mut chars = s.bytes();
        let mut pending = false;
        while let Some(ch) = chars.next() {
            let ch = match ch {
                b'.' => {
                    close_label(&mut buf, label_start)?;
                    label_start = buf.len();
                    buf.push(0);
                    pending = false;
                    continue;
                }
                b'\\' => parse_escape(&mut chars)?,
                b'!'..=b'~' => ch,
                _ => return Err(NameError(NameErrorEnum::BadChar)),
            };
            buf.push(ch);
            pending = true;
            if buf.len() - label_start - 1 > Name::MAX_LABEL_LEN {
                return Err(NameError(NameErrorEnum::LongLabel));
            }
        }
        if pending {
            close_label(&mut buf, label_start)?;
            buf.push(0);
        } else if buf.len() - label_start != 1 || label_start == 0 {
            // Only a trailing dot may leave an open label behind.
            return Err(NameError(NameErrorEnum::EmptyLabel));
        }
        if buf.len() > Name::MAX_LEN {
            return Err(NameError(NameErrorEnum::LongName));
        }
        Ok(Name(buf.into_boxed_slice()))
    }
}

/// Writes the length octet of the label starting at `start`.
fn close_label(buf: &mut [u8], start: usize) -> Result<(), NameError> {
    let len = buf.len() - start - 1;
    if len == 0 {
        return Err(NameError(NameErrorEnum::EmptyLabel));
    }
    buf[start] = len as u8;
    Ok(())
}

/// Parses the part of an escape sequence following the backslash.
fn parse_escape(
    chars: &mut impl Iterator<Item = u8>,
) -> Result<u8, NameError> {
    let first = chars.next().ok_or(NameErrorEnum::BadEscape)?;
    if !first.is_ascii_digit() {
        return if first.is_ascii_graphic() || first == b' ' {
            Ok(first)
        } else {
            Err(NameError(NameErrorEnum::BadEscape))
        };
    }
    let mut res = u16::from(first - b'0');
    for _ in 0..2 {
        let ch = chars
            .next()
            .filter(u8::is_ascii_digit)
            .ok_or(NameErrorEnum::BadEscape)?;
        res = res * 10 + u16::from(ch - b'0');
    }
    u8::try_from(res).map_err(|_| NameError(NameErrorEnum::BadEscape))
}

//--- PartialEq, Eq, and Hash

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Name {}

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for ch in self.0.iter() {
            ch.to_ascii_lowercase().hash(state)
        }
    }
}

//--- AsRef

impl AsRef<[u8]> for Name {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    /// Formats the domain name in presentation format.
    ///
    /// The name is always followed by a dot, so the root name is a single
    /// dot only.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.labels() {
            for &ch in label {
                match ch {
                    b'.' | b';' | b'(' | b')' | b'\\' => {
                        write!(f, "\\{}", ch as char)?
                    }
                    _ if ch.is_ascii_graphic() => {
                        write!(f, "{}", ch as char)?
                    }
                    _ => write!(f, "\\{:03}", ch)?,
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//--- Serialize and Deserialize

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(self.as_slice())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        struct InnerVisitor;

        impl<'de> serde::de::Visitor<'de> for InnerVisitor {
            type Value = Name;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an absolute domain name")
            }

            fn visit_str<E: serde::de::Error>(
                self,
                v: &str,
            ) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_bytes<E: serde::de::Error>(
                self,
                value: &[u8],
            ) -> Result<Self::Value, E> {
                Name::from_slice(value).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(InnerVisitor)
        } else {
            deserializer.deserialize_bytes(InnerVisitor)
        }
    }
}

//------------ LabelIter -----------------------------------------------------

/// An iterator over the contents of the non-root labels of a name.
#[derive(Clone, Debug)]
pub struct LabelIter<'a>(&'a [u8]);

impl<'a> Iterator for LabelIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (&len, tail) = self.0.split_first()?;
        if len == 0 {
            return None;
        }
        let (label, tail) = tail.split_at(usize::from(len));
        self.0 = tail;
        Some(label)
    }
}

//============ Error Types ===================================================

//------------ NameError -----------------------------------------------------

/// A domain name wasn’t encoded correctly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NameError(NameErrorEnum);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum NameErrorEnum {
    /// The encoding contained an unknown or disallowed label type.
    BadLabel,

    /// The encoding contained a compression pointer.
    CompressedName,

    /// A compression pointer did not point strictly backwards.
    BadPointer,

    /// The name was longer than 255 octets.
    LongName,

    /// A label in presentation format was longer than 63 octets.
    LongLabel,

    /// A label in presentation format was empty.
    EmptyLabel,

    /// An illegal escape sequence was encountered.
    BadEscape,

    /// A character that needs escaping was encountered.
    BadChar,

    /// The name did not end with the root label.
    RelativeName,

    /// There was more data after the root label was encountered.
    TrailingData,

    /// The input ended in the middle of a label.
    ShortInput,
}

impl From<NameErrorEnum> for NameError {
    fn from(err: NameErrorEnum) -> Self {
        NameError(err)
    }
}

impl From<NameError> for super::wire::FormError {
    fn from(err: NameError) -> Self {
        super::wire::FormError::new(err.as_str())
    }
}

impl NameError {
    fn as_str(self) -> &'static str {
        match self.0 {
            NameErrorEnum::BadLabel => "unknown label type",
            NameErrorEnum::CompressedName => "compressed domain name",
            NameErrorEnum::BadPointer => "invalid compression pointer",
            NameErrorEnum::LongName => "long domain name",
            NameErrorEnum::LongLabel => "long label",
            NameErrorEnum::EmptyLabel => "empty label",
            NameErrorEnum::BadEscape => "illegal escape sequence",
            NameErrorEnum::BadChar => "illegal character",
            NameErrorEnum::RelativeName => "relative domain name",
            NameErrorEnum::TrailingData => "trailing data",
            NameErrorEnum::ShortInput => "unexpected end of input",
        }
    }
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use core::str::FromStr;

    pub(crate) fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn from_slice() {
        assert!(Name::from_slice(b"\x03www\x07example\x03com\0").is_ok());
        assert!(Name::from_slice(b"\0").unwrap().is_root());
        assert!(Name::from_slice(b"").is_err());
        assert!(Name::from_slice(b"\x03www").is_err());
        assert!(Name::from_slice(b"\x03www\0\0").is_err());
        assert!(Name::from_slice(b"\x03www\xc0\x0c").is_err());
        assert!(Name::from_slice(b"\x43www\0").is_err());
    }

    #[test]
    fn from_str() {
        assert_eq!(
            name("www.example.com").as_slice(),
            b"\x03www\x07example\x03com\0"
        );
        assert_eq!(name("www.example.com."), name("www.example.com"));
        assert_eq!(name(".").as_slice(), b"\0");
        assert_eq!(name("a\\.b.c").as_slice(), b"\x03a.b\x01c\0");
        assert_eq!(name("a\\032b").as_slice(), b"\x03a b\0");
        assert!(Name::from_str("").is_err());
        assert!(Name::from_str("a..b").is_err());
        assert!(Name::from_str(".a").is_err());
        assert!(Name::from_str("a\\256").is_err());
        assert!(Name::from_str("a\\25").is_err());
        assert!(Name::from_str(&"a".repeat(64)).is_err());
        assert!(Name::from_str(&"a".repeat(63)).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(name("www.Example.com").to_string(), "www.Example.com.");
        assert_eq!(Name::root().to_string(), ".");
        assert_eq!(
            Name::from_slice(b"\x04a.;\"\x03\\ (\0").unwrap().to_string(),
            "a\\.\\;\".\\\\\\032\\(."
        );
    }

    #[test]
    fn eq_ignores_case() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let (a, b) = (name("WWW.example.COM"), name("www.EXAMPLE.com"));
        assert_eq!(a, b);
        let mut ha = DefaultHasher::new();
        let mut hb = DefaultHasher::new();
        a.hash(&mut ha);
        b.hash(&mut hb);
        assert_eq!(ha.finish(), hb.finish());
        assert_ne!(a, name("www.example.org"));
    }

    #[test]
    fn suffixes() {
        let n = name("www.example.com");
        assert_eq!(n.suffix_offsets().collect::<Vec<_>>(), [0, 4, 12]);
        assert_eq!(Name::root().suffix_offsets().count(), 0);
    }

    #[test]
    fn parse_compressed() {
        // 0: \x07example\x03com\0, 13: \x03www\xc0\x00
        let msg = b"\x07example\x03com\0\x03www\xc0\x00";
        let mut parser = Parser::from_ref(msg.as_ref());
        parser.advance(13).unwrap();
        let n = Name::parse_compressed(&mut parser).unwrap();
        assert_eq!(n, name("www.example.com"));
        assert_eq!(parser.pos(), msg.len());
    }

    #[test]
    fn parse_compressed_rejects_forward_and_self_pointers() {
        let msg = b"\xc0\x00";
        let mut parser = Parser::from_ref(msg.as_ref());
        assert!(Name::parse_compressed(&mut parser).is_err());

        let msg = b"\x01a\xc0\x04\0";
        let mut parser = Parser::from_ref(msg.as_ref());
        assert!(Name::parse_compressed(&mut parser).is_err());
    }

    #[test]
    fn parse_compressed_loop_is_long_name() {
        // The pointer points backwards but back at a label in front of
        // itself, which would loop forever.
        let msg = b"\x01a\xc0\x00";
        let mut parser = Parser::from_ref(msg.as_ref());
        assert_eq!(
            Name::parse_compressed(&mut parser),
            Err(NameError(NameErrorEnum::LongName))
        );
    }

    #[test]
    fn parse_uncompressed() {
        let msg = b"\x03www\0\x03www\xc0\x00";
        let mut parser = Parser::from_ref(msg.as_ref());
        assert_eq!(Name::parse_uncompressed(&mut parser).unwrap(), name("www"));
        assert_eq!(
            Name::parse_uncompressed(&mut parser),
            Err(NameError(NameErrorEnum::CompressedName))
        );
        let mut parser = Parser::from_ref(b"\x03ww".as_ref());
        assert_eq!(
            Name::parse_uncompressed(&mut parser),
            Err(NameError(NameErrorEnum::ShortInput))
        );
    }
}
