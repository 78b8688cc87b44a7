//! Certificate types of the CERT record.

use core::fmt;

//------------ CertType ------------------------------------------------------

int_enum! {
    /// Certificate types.
    ///
    /// The type of certificate carried in a CERT record. See section 2.1 of
    /// [RFC 4398] for the registry.
    ///
    /// [RFC 4398]: https://tools.ietf.org/html/rfc4398
    =>
    CertType, u16;

    /// X.509 as per PKIX.
    (PKIX => 1, "PKIX")

    /// SPKI certificate.
    (SPKI => 2, "SPKI")

    /// OpenPGP packet.
    (PGP => 3, "PGP")

    /// The URL of an X.509 data object.
    (IPKIX => 4, "IPKIX")

    /// The URL of an SPKI certificate.
    (ISPKI => 5, "ISPKI")

    /// The fingerprint and URL of an OpenPGP packet.
    (IPGP => 6, "IPGP")

    /// Attribute certificate.
    (ACPKIX => 7, "ACPKIX")

    /// The URL of an attribute certificate.
    (IACPKIX => 8, "IACPKIX")

    /// URI private.
    (URI => 253, "URI")

    /// OID private.
    (OID => 254, "OID")
}

//--- Display

impl fmt::Display for CertType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.to_mnemonic_str() {
            Some(m) => f.write_str(m),
            None => write!(f, "{}", self.to_int()),
        }
    }
}

//============ Testing =======================================================
