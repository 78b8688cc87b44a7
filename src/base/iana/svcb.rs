//! Service Binding (SVCB) Parameter Registry

int_enum! {
    /// The key of a service binding parameter.
    ///
    /// See [RFC 9460] for the registry and the wire format of the
    /// individual parameter values.
    ///
    /// [RFC 9460]: https://tools.ietf.org/html/rfc9460
    =>
    SvcParamKey, u16;

    (MANDATORY => 0, "mandatory")
    (ALPN => 1, "alpn")
    (NO_DEFAULT_ALPN => 2, "no-default-alpn")
    (PORT => 3, "port")
    (IPV4HINT => 4, "ipv4hint")
    // https://datatracker.ietf.org/doc/draft-ietf-tls-esni/
    (ECH => 5, "ech")
    (IPV6HINT => 6, "ipv6hint")
    // https://datatracker.ietf.org/doc/rfc9461/
    (DOHPATH => 7, "dohpath")
}

int_enum_str_with_prefix!(SvcParamKey, "key", b"key", "unknown key");

impl SvcParamKey {
    /// The reserved key 65535, which must never appear in record data.
    pub const INVALID: Self = Self(65535);
}

//============ Testing =======================================================
