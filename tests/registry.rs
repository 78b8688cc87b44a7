//! The registry of record types and classes.

use domain_rdata::base::{Class, Rtype};
use domain_rdata::rdata::{
    class_from_name, class_to_string, lookup_type, type_from_name,
    type_to_string,
};
use rstest::rstest;

const KNOWN: &[u16] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20,
    21, 22, 24, 25, 26, 28, 29, 30, 33, 35, 36, 37, 38, 39, 41, 42, 43, 44,
    45, 46, 47, 48, 49, 50, 51, 52, 53, 59, 60, 61, 62, 63, 64, 65, 99, 104,
    105, 106, 107, 108, 109, 256, 257, 258, 32769,
];

#[test]
fn every_code_has_a_descriptor() {
    for code in 0..=u16::MAX {
        let rtype = Rtype::from_int(code);
        let desc = lookup_type(rtype);
        assert_eq!(desc.rtype, rtype);
        assert!(!desc.fields.is_empty(), "{}", code);
        assert_eq!(desc.is_known(), KNOWN.contains(&code), "{}", code);
        match desc.name {
            Some(name) => {
                assert_eq!(type_to_string(rtype), name);
                assert_eq!(type_from_name(name), code);
                assert_eq!(type_from_name(&name.to_ascii_lowercase()), code);
            }
            None => {
                assert!(desc.is_generic(), "{}", code);
                assert_eq!(type_to_string(rtype), format!("TYPE{}", code));
            }
        }
    }
}

#[rstest]
#[case(0)]
#[case(23)]
#[case(40)]
#[case(54)]
#[case(55)]
#[case(66)]
#[case(98)]
#[case(100)]
#[case(103)]
#[case(110)]
#[case(249)]
#[case(250)]
#[case(251)]
#[case(252)]
#[case(255)]
#[case(259)]
#[case(32768)]
#[case(32770)]
#[case(65535)]
fn unassigned(#[case] code: u16) {
    let desc = lookup_type(Rtype::from_int(code));
    assert!(desc.is_generic());
    assert_eq!(desc.name, None);
    assert_eq!(type_to_string(Rtype::from_int(code)), format!("TYPE{}", code));
    if code != 0 {
        assert_eq!(type_from_name(&format!("TYPE{}", code)), code);
    }
}

#[rstest]
#[case::null(Rtype::NULL)]
#[case::a6(Rtype::A6)]
#[case::opt(Rtype::OPT)]
fn known_but_opaque(#[case] rtype: Rtype) {
    let desc = lookup_type(rtype);
    assert!(desc.is_known());
    assert!(desc.is_generic());
    assert!(!desc.has_handles());
}

#[rstest]
#[case("A", 1)]
#[case("aaaa", 28)]
#[case("nsec3PARAM", 51)]
#[case("Https", 65)]
#[case("dlv", 32769)]
#[case("TYPE1", 1)]
#[case("type260", 260)]
#[case("TYPE065", 65)]
#[case("TYPE65535", 65535)]
#[case("TYPE65536", 0)]
#[case("TYPE99999", 0)]
#[case("TYPE0123456", 0)]
#[case("TYPE 1", 0)]
#[case("TYPE1 ", 0)]
#[case("TYPE+1", 0)]
#[case("TYPE-1", 0)]
#[case("TYPE", 0)]
#[case("TYPEA", 0)]
#[case("IN", 0)]
#[case("in", 0)]
#[case("86400", 0)]
#[case("", 0)]
#[case("AX", 0)]
#[case("NSEC4", 0)]
#[case("HIP", 0)]
fn types_from_text(#[case] name: &str, #[case] code: u16) {
    assert_eq!(type_from_name(name), code);
}

#[rstest]
#[case("IN", 1)]
#[case("in", 1)]
#[case("CS", 2)]
#[case("ch", 3)]
#[case("Hs", 4)]
#[case("CLASS1", 1)]
#[case("class254", 254)]
#[case("CLASS65535", 65535)]
#[case("CLASS65536", 0)]
#[case("CLASS0123456", 0)]
#[case("CLASS", 0)]
#[case("ANY", 0)]
#[case("A", 0)]
#[case("", 0)]
fn classes_from_text(#[case] name: &str, #[case] code: u16) {
    assert_eq!(class_from_name(name), code);
}

#[test]
fn classes_to_text() {
    assert_eq!(class_to_string(Class::IN), "IN");
    assert_eq!(class_to_string(Class::HS), "HS");
    assert_eq!(class_to_string(Class::from_int(0)), "CLASS0");
    assert_eq!(class_to_string(Class::from_int(255)), "CLASS255");
    for code in [1, 2, 3, 4, 42, 254, 65535] {
        let text = class_to_string(Class::from_int(code));
        assert_eq!(class_from_name(&text), code);
    }
}
