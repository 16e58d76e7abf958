use std::thread;

use dicomvr_core::rules::{ConversionRule, RuleContext, code, numeric, temporal};
use dicomvr_core::{
    CodeStringPolicy, DataElement, ParseError, ParsedValue, Parser, ParserOptions, RawScalar,
    RawValue, Tag, Value, Vendor, Vr,
};

fn siemens_parser() -> Parser {
    Parser::new(ParserOptions::default().with_vendor(Vendor::Siemens))
}

#[test]
fn each_member_matches_its_rule_in_order() {
    let parser = Parser::default();
    let tag = Tag::new(0x0018, 0x0021);
    let ctx = RuleContext {
        tag,
        code_strings: CodeStringPolicy::Lenient,
    };
    let cases: [(&str, &str, ConversionRule); 8] = [
        ("DS", "1", numeric::parse_decimal_string),
        ("DS", "0.5\\-2.25\\1e3", numeric::parse_decimal_string),
        ("IS", "1\\2\\3", numeric::parse_integer_string),
        ("AS", "027Y\\006M", numeric::parse_age_string),
        ("CS", "SK\\SP\\MP\\OSP", code::parse_code_string),
        ("DA", "20180501\\20180502\\19991231", temporal::parse_date),
        ("TM", "122156.958000\\0930\\23", temporal::parse_time),
        ("DT", "20180501122542\\1999\\20180501+0100", temporal::parse_datetime),
    ];
    for (vr, text, rule) in cases {
        let element = DataElement::new(tag, vr, text);
        let members: Vec<Value> = match parser.parse(&element) {
            Ok(ParsedValue::Single(value)) => vec![value],
            Ok(ParsedValue::Multi(values)) => values,
            Ok(ParsedValue::Raw(_)) => panic!("{vr} should be converted"),
            Err(err) => panic!("{vr} '{text}': {err}"),
        };
        assert_eq!(members.len(), element.value().multiplicity(), "{vr} '{text}'");

        let expected: Vec<Value> = text
            .split('\\')
            .map(|part| rule(part, &ctx).expect("member"))
            .collect();
        assert_eq!(members, expected, "{vr} '{text}'");
    }
}

#[test]
fn unregistered_vrs_pass_through_unchanged() {
    let parser = Parser::default();
    let registered = [Vr::AS, Vr::DS, Vr::IS, Vr::DA, Vr::TM, Vr::DT, Vr::CS, Vr::UN];
    for vr in Vr::ALL.iter().filter(|vr| !registered.contains(*vr)) {
        let element = DataElement::new(Tag::new(0x0008, 0x1030), vr.code(), "anything\\at all");
        assert_eq!(parser.parse(&element).expect("parse"), *element.value(), "{vr}");
    }
}

#[test]
fn unrecognized_codes_are_rejected() {
    let parser = Parser::default();
    for code in ["KITTENS", "ds", "XX", ""] {
        let element = DataElement::new(Tag::new(0x0020, 0x000d), code, "1.2.3");
        match parser.parse(&element) {
            Err(ParseError::UnsupportedVr { code: got }) => assert_eq!(got, code),
            other => panic!("'{code}' should be unsupported, got {other:?}"),
        }
    }
}

#[test]
fn parsing_is_repeatable() {
    let parser = siemens_parser();
    let elements = [
        DataElement::new(Tag::new(0x0008, 0x0031), "TM", "122156.958000"),
        DataElement::new(Tag::new(0x0010, 0x1010), "AS", "006M"),
        DataElement::new(Tag::new(0x0019, 0x100d), "UN", b"DIRECTIONAL ".to_vec()),
    ];
    for element in &elements {
        let first = parser.parse(element).expect("parse");
        let second = parser.parse(element).expect("parse");
        assert_eq!(first, second);
    }
}

#[test]
fn packed_double_length_must_be_aligned() {
    let parser = siemens_parser();
    let tag = Tag::new(0x0019, 0x100e);

    let aligned = DataElement::new(tag, "UN", vec![0u8; 24]);
    assert_eq!(
        parser.parse(&aligned).expect("aligned"),
        ParsedValue::Multi(vec![Value::Float(0.0); 3])
    );

    let misaligned = DataElement::new(tag, "UN", vec![0u8; 23]);
    let err = parser.parse(&misaligned).unwrap_err();
    assert!(matches!(err, ParseError::MalformedPrivateValue { .. }));
    assert_eq!(
        err.to_string(),
        "malformed SIEMENS private value of (0019,100E): byte length 23 is not a multiple of 8"
    );
}

#[test]
fn scanning_sequence_end_to_end() {
    let parser = Parser::default();
    let element = DataElement::new(Tag::new(0x0018, 0x0021), "CS", "SK\\SP");
    let parsed = parser.parse(&element).expect("parse");
    assert_eq!(
        parsed,
        ParsedValue::Multi(vec![Value::Text("SK".into()), Value::Text("SP".into())])
    );
    let json = serde_json::to_value(&parsed).expect("json");
    assert_eq!(json, serde_json::json!(["SK", "SP"]));
}

#[test]
fn pre_split_private_members_match_joined_bytes() {
    let parser = siemens_parser();
    let tag = Tag::new(0x0019, 0x1014);
    let joined = DataElement::new(tag, "UN", "0\\0\\-12");
    let split = DataElement::with_values(
        tag,
        "UN",
        [RawScalar::from("0"), RawScalar::from("0"), RawScalar::from("-12")],
    );
    assert_eq!(
        parser.parse(&joined).expect("joined"),
        parser.parse(&split).expect("split")
    );
}

#[test]
fn parser_is_shared_across_threads() {
    let parser = siemens_parser();
    let handles: Vec<_> = (0..8)
        .map(|index| {
            thread::spawn(move || {
                let text = format!("{}\\{}", index, index * 2);
                let element = DataElement::new(Tag::new(0x0020, 0x0013), "IS", text.as_str());
                let dwi = DataElement::new(
                    Tag::new(0x0019, 0x100a),
                    "UN",
                    RawValue::from((index as u16).to_le_bytes().to_vec()),
                );
                (parser.parse(&element), parser.parse(&dwi), index)
            })
        })
        .collect();

    for handle in handles {
        let (parsed, dwi, index) = handle.join().expect("thread");
        assert_eq!(
            parsed.expect("parse"),
            ParsedValue::Multi(vec![Value::Int(index), Value::Int(index * 2)])
        );
        assert_eq!(dwi.expect("dwi"), ParsedValue::Single(Value::Int(index)));
    }
}
