//! Helpers shared by the integration tests.
#![allow(dead_code)]

use domain_rdata::base::Rtype;

/// Installs a log subscriber controlled via `RUST_LOG`.
///
/// Use e.g. `RUST_LOG=trace` to see why records were rejected.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .try_init()
        .ok();
}

/// Prefixes record data with its length.
pub fn with_len(rdata: &[u8]) -> Vec<u8> {
    let mut res = Vec::with_capacity(rdata.len() + 2);
    res.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    res.extend_from_slice(rdata);
    res
}

/// Valid uncompressed record data for every known record type.
pub const SAMPLES: &[(Rtype, &[u8])] = &[
    (Rtype::A, b"\xc0\x00\x02\x01"),
    (Rtype::NS, b"\x02ns\x07example\x00"),
    (Rtype::MD, b"\x02md\x07example\x00"),
    (Rtype::MF, b"\x02mf\x07example\x00"),
    (Rtype::CNAME, b"\x03www\x07example\x00"),
    (
        Rtype::SOA,
        b"\x02ns\x07example\x00\x04host\x07example\x00\
          \x78\x49\x5f\x21\x00\x00\x0e\x10\x00\x00\x02\x58\
          \x00\x09\x3a\x80\x00\x00\x01\x2c",
    ),
    (Rtype::MB, b"\x02mb\x00"),
    (Rtype::MG, b"\x02mg\x00"),
    (Rtype::MR, b"\x02mr\x00"),
    (Rtype::NULL, b"\x01\x02\x03"),
    (Rtype::WKS, b"\xc0\x00\x02\x01\x06\x00\x00\x00\x40"),
    (Rtype::PTR, b"\x03ptr\x07example\x00"),
    (Rtype::HINFO, b"\x03CPU\x02OS"),
    (Rtype::MINFO, b"\x01a\x07example\x00\x01b\x07example\x00"),
    (Rtype::MX, b"\x00\x0a\x04mail\x07example\x00"),
    (Rtype::TXT, b"\x05hello\x05world"),
    (Rtype::RP, b"\x01a\x07example\x00\x01b\x07example\x00"),
    (Rtype::AFSDB, b"\x00\x01\x03afs\x07example\x00"),
    (Rtype::X25, b"\x0c311061700956"),
    (Rtype::ISDN, b"\x0f150862028003217\x03004"),
    (Rtype::RT, b"\x00\x0a\x05relay\x07example\x00"),
    (Rtype::NSAP, b"\x47\x00\x05\x80\x00\x5a\x00"),
    (
        Rtype::SIG,
        b"\x00\x01\x08\x02\x00\x00\x0e\x10\
          \x5f\x5e\x10\x00\x5f\x36\x83\x00\x30\x39\
          \x07example\x00\x01\x02\x03",
    ),
    (Rtype::KEY, b"\x01\x00\x03\x08\x01\x02\x03"),
    (Rtype::PX, b"\x00\x0a\x01a\x00\x01b\x00"),
    (
        Rtype::AAAA,
        b"\x20\x01\x0d\xb8\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x01",
    ),
    (
        Rtype::LOC,
        b"\x00\x00\x16\x13\x8b\x3c\xf0\x18\x81\x0c\xbc\xe0\x00\x98\x95\xb8",
    ),
    (Rtype::NXT, b"\x01b\x07example\x00\x60\x00\x00\x80"),
    (Rtype::SRV, b"\x00\x01\x00\x02\x00\x35\x03dns\x07example\x00"),
    (
        Rtype::NAPTR,
        b"\x00\x64\x00\x0a\x01S\x07SIP+D2U\x00\x04_sip\x04_udp\x00",
    ),
    (Rtype::KX, b"\x00\x0a\x02kx\x00"),
    (Rtype::CERT, b"\x00\x01\x00\x0c\x08\x01\x02\x03"),
    (Rtype::A6, b"\x00\x01\x02"),
    (Rtype::DNAME, b"\x07example\x00"),
    (Rtype::OPT, b"\x00\x0a\x00\x00"),
    (Rtype::APL, b"\x00\x01\x15\x03\xc0\xa8\x20\x00\x02\x08\x01\xff"),
    (Rtype::DS, b"\xe4\xb9\x08\x02\xab\xcd"),
    (Rtype::SSHFP, b"\x01\x01\xab\xcd"),
    (
        Rtype::IPSECKEY,
        b"\x0a\x03\x02\x02gw\x07example\x00\x01\x02\x03",
    ),
    (
        Rtype::RRSIG,
        b"\x00\x01\x08\x02\x00\x00\x0e\x10\
          \x5f\x5e\x10\x00\x5f\x36\x83\x00\x30\x39\
          \x07Example\x00\x01\x02\x03",
    ),
    (
        Rtype::NSEC,
        b"\x04host\x07example\x00\x00\x06\x40\x01\x00\x00\x00\x03",
    ),
    (Rtype::DNSKEY, b"\x01\x01\x03\x08\x01\x02\x03"),
    (Rtype::DHCID, b"\x00\x01\x01\x02\x03"),
    (
        Rtype::NSEC3,
        b"\x01\x01\x00\x0a\x02\xab\xcd\x05\x00\x00\x00\x00\x00\
          \x00\x01\x40",
    ),
    (Rtype::NSEC3PARAM, b"\x01\x00\x00\x0a\x02\xab\xcd"),
    (Rtype::TLSA, b"\x03\x01\x01\xab\xcd"),
    (Rtype::SMIMEA, b"\x03\x01\x01\xab\xcd"),
    (Rtype::CDS, b"\xe4\xb9\x08\x02\xab\xcd"),
    (Rtype::CDNSKEY, b"\x01\x01\x03\x08\x01\x02\x03"),
    (Rtype::OPENPGPKEY, b"\x01\x02\x03"),
    (Rtype::CSYNC, b"\x00\x00\x00\x01\x00\x03\x00\x01\x40"),
    (Rtype::ZONEMD, b"\x00\x00\x00\x01\x01\x01\xab\xcd"),
    (Rtype::SVCB, b"\x00\x01\x03svc\x00\x00\x03\x00\x02\x01\xbb"),
    (Rtype::HTTPS, b"\x00\x01\x00\x00\x01\x00\x03\x02h2"),
    (Rtype::SPF, b"\x0bv=spf1 -all"),
    (Rtype::NID, b"\x00\x0a\x00\x14\x4f\xff\xfe\x5a\x00\x01"),
    (Rtype::L32, b"\x00\x0a\x0a\x01\x02\x03"),
    (Rtype::L64, b"\x00\x0a\x20\x01\x0d\xb8\x14\x0c\x00\x00"),
    (Rtype::LP, b"\x00\x0a\x03l64\x07example\x00"),
    (Rtype::EUI48, b"\x00\x00\x5e\x00\x53\x2a"),
    (Rtype::EUI64, b"\x00\x00\x5e\xef\x10\x00\x00\x2a"),
    (Rtype::URI, b"\x00\x0a\x00\x01https://example/"),
    (Rtype::CAA, b"\x00\x05issueca.example"),
    (Rtype::AVC, b"\x03app"),
    (Rtype::DLV, b"\xe4\xb9\x08\x02\xab\xcd"),
];
