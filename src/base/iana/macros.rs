//! Macros making implementing IANA types easier.

/// Creates a standard IANA type wrapping an integer.
///
/// This adds impls for `From`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, and
/// `Hash`.
///
/// For `FromStr` and `Display`, see one of the other macros in this module.
macro_rules! int_enum {
    ( $(#[$attr:meta])* =>
      $ianatype:ident, $inttype:ident;
      $( $(#[$variant_attr:meta])* ( $variant:ident =>
                                        $value:expr, $mnemonic:expr) )* ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $ianatype($inttype);

        impl $ianatype {
            $(
                $(#[$variant_attr])*
                pub const $variant: $ianatype = $ianatype($value);
            )*
        }

        impl $ianatype {
            /// Returns a value from its raw integer value.
            #[must_use]
            pub const fn from_int(value: $inttype) -> Self {
                Self(value)
            }

            /// Returns the raw integer value for a value.
            #[must_use]
            pub const fn to_int(self) -> $inttype {
                self.0
            }

            /// Returns a value from a well-defined mnemonic.
            #[must_use]
            pub fn from_mnemonic(m: &[u8]) -> Option<Self> {
                $(
                    if m.eq_ignore_ascii_case($mnemonic.as_bytes()) {
                        return Some($ianatype::$variant)
                    }
                )*
                None
            }

            /// Returns the mnemonic as a `&str` for this value if there is one
            #[must_use]
            pub const fn to_mnemonic_str(self) -> Option<&'static str> {
                match self {
                    $(
                        $ianatype::$variant => {
                            Some($mnemonic)
                        }
                    )*
                    _ => None
                }
            }
        }

        //--- From

        impl From<$inttype> for $ianatype {
            fn from(value: $inttype) -> Self {
                $ianatype::from_int(value)
            }
        }

        impl From<$ianatype> for $inttype {
            fn from(value: $ianatype) -> Self {
                value.to_int()
            }
        }

        //--- Debug

        impl core::fmt::Debug for $ianatype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic_str() {
                    Some(mnemonic) => {
                        write!(
                            f,
                            concat!(stringify!($ianatype), "::{}"),
                            mnemonic
                        )
                    }
                    None => {
                        f.debug_tuple(stringify!($ianatype))
                            .field(&self.0)
                            .finish()
                    }
                }
            }
        }
    };
}

/// Parses the strict decimal tail of a prefixed numeric mnemonic.
///
/// Accepts one to five ASCII digits with a value of at most 65535. Signs,
/// white space, and anything else are rejected.
pub(crate) fn parse_prefixed_decimal(
    bytes: &[u8],
    prefix: &[u8],
) -> Option<u16> {
    if bytes.len() <= prefix.len() {
        return None;
    }
    let (l, r) = bytes.split_at(prefix.len());
    if !l.eq_ignore_ascii_case(prefix) || r.len() > 5 {
        return None;
    }
    let mut res = 0u32;
    for &ch in r {
        if !ch.is_ascii_digit() {
            return None;
        }
        res = res * 10 + u32::from(ch - b'0');
    }
    u16::try_from(res).ok()
}

/// Adds impls for `FromStr` and `Display` to the type given as first argument.
///
/// For `FromStr` recognizes all defined mnemonics ignoring case. Additionally
/// recognizes a value starting with the prefix given in the second argument
/// (again, ignoring case) directly followed by a decimal number.
///
/// For `Display`, values without mnemonic will be written starting with the
/// prefix directly followed by the decimal representation of the value.
macro_rules! int_enum_str_with_prefix {
    ($ianatype:ident, $str_prefix:expr, $u8_prefix:expr, $error:expr) => {
        impl $ianatype {
            /// Returns a value from a mnemonic or the prefixed number.
            #[must_use]
            pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
                $ianatype::from_mnemonic(bytes).or_else(|| {
                    $crate::base::iana::macros::parse_prefixed_decimal(
                        bytes, $u8_prefix,
                    )
                    .map($ianatype::from_int)
                })
            }
        }

        impl core::str::FromStr for $ianatype {
            type Err = FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // We assume all mnemonics are always ASCII, so using
                // the bytes representation of `s` is safe.
                $ianatype::from_bytes(s.as_bytes()).ok_or(FromStrError(()))
            }
        }

        impl core::fmt::Display for $ianatype {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match self.to_mnemonic_str() {
                    Some(m) => f.write_str(m),
                    None => {
                        write!(f, "{}{}", $str_prefix, self.to_int())
                    }
                }
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ianatype {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.collect_str(&format_args!("{}", self))
                } else {
                    self.to_int().serialize(serializer)
                }
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ianatype {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                $crate::base::serde::deserialize_native_or_str(deserializer)
            }
        }

        from_str_error!($error);
    };
}

macro_rules! from_str_error {
    ($description:expr) => {
        #[derive(Clone, Debug, Eq, PartialEq)]
        pub struct FromStrError(());

        impl std::error::Error for FromStrError {}

        impl core::fmt::Display for FromStrError {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                $description.fmt(f)
            }
        }
    };
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::parse_prefixed_decimal;

    #[test]
    fn prefixed_decimal() {
        assert_eq!(parse_prefixed_decimal(b"TYPE1", b"TYPE"), Some(1));
        assert_eq!(parse_prefixed_decimal(b"type65535", b"TYPE"), Some(65535));
        assert_eq!(parse_prefixed_decimal(b"TYPE00012", b"TYPE"), Some(12));
        assert_eq!(parse_prefixed_decimal(b"TYPE65536", b"TYPE"), None);
        assert_eq!(parse_prefixed_decimal(b"TYPE000001", b"TYPE"), None);
        assert_eq!(parse_prefixed_decimal(b"TYPE", b"TYPE"), None);
        assert_eq!(parse_prefixed_decimal(b"TYPE+1", b"TYPE"), None);
        assert_eq!(parse_prefixed_decimal(b"TYPE-1", b"TYPE"), None);
        assert_eq!(parse_prefixed_decimal(b"TYPE1x", b"TYPE"), None);
        assert_eq!(parse_prefixed_decimal(b"TYP1", b"TYPE"), None);
        assert_eq!(parse_prefixed_decimal(b"CLASS4", b"CLASS"), Some(4));
    }
}
