use std::fs;
use std::path::{Path, PathBuf};

use dicomvr_core::{HeaderInput, parse_header};
use serde_json::Value;

fn golden_dir(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_json(path: &Path) -> Value {
    let json = fs::read_to_string(path).expect("read golden json");
    serde_json::from_str(&json).expect("parse golden json")
}

fn run_golden(dir: &str) {
    let root = golden_dir(dir);
    let input_json = fs::read_to_string(root.join("elements.json")).expect("read elements.json");
    let header: HeaderInput = serde_json::from_str(&input_json).expect("parse elements.json");
    let expected = load_json(&root.join("expected.json"));

    let actual = parse_header(header).expect("parse header");
    let actual_value = serde_json::to_value(actual).expect("serialize actual");

    assert_eq!(actual_value, expected, "golden mismatch in {dir}");
}

#[test]
fn golden_siemens_dwi() {
    run_golden("tests/golden/siemens_dwi");
}

#[test]
fn golden_errors() {
    run_golden("tests/golden/errors");
}

#[test]
fn golden_siemens_dwi_has_no_errors() {
    let expected = load_json(&golden_dir("tests/golden/siemens_dwi").join("expected.json"));
    let results = expected["results"].as_array().expect("results");
    assert!(results.iter().all(|r| r.get("error").is_none()));
}

#[test]
fn golden_errors_has_only_errors_or_nulls() {
    let expected = load_json(&golden_dir("tests/golden/errors").join("expected.json"));
    let results = expected["results"].as_array().expect("results");
    for result in results {
        let ok = result.get("error").is_some() || result["value"].is_null();
        assert!(ok, "unexpected value in {result}");
    }
}
