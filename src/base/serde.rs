//! Traits, types, and functions helping with implementing serialization.
#![cfg(feature = "serde")]

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;
use serde::de::{Deserializer, Error, Visitor};

//------------ deserialize_native_or_str -------------------------------------

/// Deserializes a 16 bit IANA value from either its integer or its text.
///
/// Compact formats carry the integer. Human readable formats may carry
/// either, with the text being a mnemonic or the prefixed decimal form.
pub fn deserialize_native_or_str<'de, T, D>(
    deserializer: D,
) -> Result<T, D::Error>
where
    T: From<u16> + FromStr,
    D: Deserializer<'de>,
{
    struct NativeOrStrVisitor<T>(PhantomData<T>);

    impl<'de, T: From<u16> + FromStr> Visitor<'de> for NativeOrStrVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer or a mnemonic")
        }

        fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
            u16::try_from(value)
                .map(T::from)
                .map_err(|_| E::custom("value out of range"))
        }

        fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
            u16::try_from(value)
                .map(T::from)
                .map_err(|_| E::custom("value out of range"))
        }

        fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
            T::from_str(value).map_err(|_| E::custom("unknown mnemonic"))
        }
    }

    if deserializer.is_human_readable() {
        deserializer.deserialize_any(NativeOrStrVisitor(PhantomData))
    } else {
        deserializer.deserialize_u16(NativeOrStrVisitor(PhantomData))
    }
}
