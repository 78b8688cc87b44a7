//! Presentation format of record data.

mod common;

use common::{init_logging, SAMPLES};
use domain_rdata::base::{NameTable, Rtype};
use domain_rdata::rdata::{
    lookup_type, present_generic, present_rdata, present_wire, Rdata,
};
use rstest::rstest;

/// The presentation format of the common samples.
const PRESENTED: &[(Rtype, &str)] = &[
    (Rtype::A, "192.0.2.1"),
    (Rtype::NS, "ns.example."),
    (Rtype::MD, "md.example."),
    (Rtype::MF, "mf.example."),
    (Rtype::CNAME, "www.example."),
    (
        Rtype::SOA,
        "ns.example. host.example. 2018074401 3600 600 604800 300",
    ),
    (Rtype::MB, "mb."),
    (Rtype::MG, "mg."),
    (Rtype::MR, "mr."),
    (Rtype::NULL, "\\# 3 010203"),
    (Rtype::WKS, "192.0.2.1 6 25"),
    (Rtype::PTR, "ptr.example."),
    (Rtype::HINFO, "\"CPU\" \"OS\""),
    (Rtype::MINFO, "a.example. b.example."),
    (Rtype::MX, "10 mail.example."),
    (Rtype::TXT, "\"hello\" \"world\""),
    (Rtype::RP, "a.example. b.example."),
    (Rtype::AFSDB, "1 afs.example."),
    (Rtype::X25, "\"311061700956\""),
    (Rtype::ISDN, "\"150862028003217\" \"004\""),
    (Rtype::RT, "10 relay.example."),
    (Rtype::NSAP, "0x47000580005a00"),
    (
        Rtype::SIG,
        "A 8 2 3600 20200913122640 20200814122640 12345 example. AQID",
    ),
    (Rtype::KEY, "256 3 8 AQID"),
    (Rtype::PX, "10 a. b."),
    (Rtype::AAAA, "2001:db8::1"),
    (
        Rtype::LOC,
        "52 22 23.000 N 4 53 32.000 E -2.00m 0.00m 10000m 10m",
    ),
    (Rtype::NXT, "b.example. A NS SIG"),
    (Rtype::SRV, "1 2 53 dns.example."),
    (Rtype::NAPTR, "100 10 \"S\" \"SIP+D2U\" \"\" _sip._udp."),
    (Rtype::KX, "10 kx."),
    (Rtype::CERT, "PKIX 12 8 AQID"),
    (Rtype::A6, "\\# 3 000102"),
    (Rtype::DNAME, "example."),
    (Rtype::OPT, "\\# 4 000a0000"),
    (Rtype::APL, "1:192.168.32.0/21 2:ff00::/8"),
    (Rtype::DS, "58553 8 2 abcd"),
    (Rtype::SSHFP, "1 1 abcd"),
    (Rtype::IPSECKEY, "10 3 2 gw.example. AQID"),
    (
        Rtype::RRSIG,
        "A 8 2 3600 20200913122640 20200814122640 12345 Example. AQID",
    ),
    (Rtype::NSEC, "host.example. A MX RRSIG NSEC"),
    (Rtype::DNSKEY, "257 3 8 AQID"),
    (Rtype::DHCID, "AAEBAgM="),
    (Rtype::NSEC3, "1 1 10 abcd 00000000 A"),
    (Rtype::NSEC3PARAM, "1 0 10 abcd"),
    (Rtype::TLSA, "3 1 1 abcd"),
    (Rtype::SMIMEA, "3 1 1 abcd"),
    (Rtype::CDS, "58553 8 2 abcd"),
    (Rtype::CDNSKEY, "257 3 8 AQID"),
    (Rtype::OPENPGPKEY, "AQID"),
    (Rtype::CSYNC, "1 3 A"),
    (Rtype::ZONEMD, "1 1 1 abcd"),
    (Rtype::SVCB, "1 svc. port=443"),
    (Rtype::HTTPS, "1 . alpn=\"h2\""),
    (Rtype::SPF, "\"v=spf1 -all\""),
    (Rtype::NID, "10 0014:4fff:fe5a:0001"),
    (Rtype::L32, "10 10.1.2.3"),
    (Rtype::L64, "10 2001:0db8:140c:0000"),
    (Rtype::LP, "10 l64.example."),
    (Rtype::EUI48, "00-00-5e-00-53-2a"),
    (Rtype::EUI64, "00-00-5e-ef-10-00-00-2a"),
    (Rtype::URI, "10 1 \"https://example/\""),
    (Rtype::CAA, "0 issue \"ca.example\""),
    (Rtype::AVC, "\"app\""),
    (Rtype::DLV, "58553 8 2 abcd"),
];

#[test]
fn samples() {
    init_logging();
    let mut names = NameTable::new();
    for &(rtype, rdata) in SAMPLES {
        let decoded = Rdata::from_wire(rtype, rdata, &mut names).unwrap();
        let mut out = String::new();
        present_rdata(&decoded, &names, &mut out);

        // Only types without a schema end up generic.
        assert_eq!(
            out.starts_with("\\#"),
            lookup_type(rtype).is_generic(),
            "{}: {}",
            rtype,
            out
        );
        assert!(!out.starts_with(' ') && !out.ends_with(' '), "{}", rtype);
        if let Some(&(_, expected)) =
            PRESENTED.iter().find(|(known, _)| *known == rtype)
        {
            assert_eq!(out, expected, "{}", rtype);
        }

        // Presenting straight from the wire gives the same.
        let mut wire_out = String::new();
        present_wire(rtype, rdata, &mut wire_out);
        assert_eq!(out, wire_out, "{}", rtype);

        decoded.release(&mut names);
    }
}

#[test]
fn appends() {
    init_logging();
    let mut out = String::from("example. 3600 IN A ");
    present_wire(Rtype::A, b"\xc0\x00\x02\x01", &mut out);
    assert_eq!(out, "example. 3600 IN A 192.0.2.1");

    let mut out = String::from("x ");
    present_wire(Rtype::from_int(54), b"\x01", &mut out);
    assert_eq!(out, "x \\# 1 01");
}

#[rstest]
#[case::unassigned(Rtype::from_int(54), b"\x01\x02\x03", "\\# 3 010203")]
#[case::private(Rtype::from_int(65280), b"", "\\# 0")]
#[case::tsig(Rtype::from_int(250), b"\xab", "\\# 1 ab")]
#[case::empty_txt(Rtype::TXT, b"", "\\# 0")]
#[case::broken_a(Rtype::A, b"\x01\x02\x03", "\\# 3 010203")]
#[case::upper_caa(
    Rtype::CAA,
    b"\x00\x05Issuex",
    "\\# 8 0005497373756578"
)]
#[case::empty_hash(
    Rtype::NSEC3,
    b"\x01\x00\x00\x00\x00\x00",
    "\\# 6 010000000000"
)]
#[case::bad_window(
    Rtype::NSEC,
    b"\x00\x00\x00",
    "\\# 3 000000"
)]
fn falls_back(#[case] rtype: Rtype, #[case] rdata: &[u8], #[case] res: &str) {
    init_logging();
    let mut out = String::new();
    present_wire(rtype, rdata, &mut out);
    assert_eq!(out, res);

    let mut generic = String::new();
    present_generic(rdata, &mut generic);
    assert_eq!(out, generic);
}

#[test]
fn nsec3param_without_salt() {
    init_logging();
    let mut out = String::new();
    present_wire(Rtype::NSEC3PARAM, b"\x01\x00\x00\x0a\x00", &mut out);
    assert_eq!(out, "1 0 10 -");
}

#[test]
fn text_escapes() {
    init_logging();
    let mut out = String::new();
    present_wire(Rtype::TXT, b"\x09a b\"c\\d\x7f\xff", &mut out);
    assert_eq!(out, "\"a b\\\"c\\\\d\\127\\255\"");
}
