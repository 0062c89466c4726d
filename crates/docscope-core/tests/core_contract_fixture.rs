use std::{fs, path::PathBuf};

use docscope_core::error::DocScopeError;
use docscope_core::models::{Record, SearchResult, TocEntry, VocabularyTerm};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

const FIXED_TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CoreContractFixture {
    search_result: SearchResult,
    toc_entry: TocEntry,
    error_payload_missing_category: Value,
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("core_contract_fixture.json")
}

fn load_fixture_raw_value() -> Value {
    let raw = fs::read_to_string(fixture_path()).expect("read core contract fixture");
    serde_json::from_str(&raw).expect("parse core contract fixture")
}

fn load_fixture() -> CoreContractFixture {
    serde_json::from_value(load_fixture_raw_value()).expect("decode core contract fixture")
}

fn fixture_section(raw: &Value, key: &str) -> Value {
    raw.get(key)
        .cloned()
        .unwrap_or_else(|| panic!("missing fixture section: {key}"))
}

#[test]
fn search_result_matches_contract_shape() {
    let raw = load_fixture_raw_value();
    let record = Record::VocabularyTerm(VocabularyTerm {
        key: "mixer.gain".to_string(),
        term: "Gain".to_string(),
        locale: "en".to_string(),
    });
    let result = SearchResult::from_record("vocabulary", &record, 1.0);
    let serialized = serde_json::to_value(&result).expect("serialize search result");
    assert_eq!(serialized, fixture_section(&raw, "search_result"));
    assert_eq!(load_fixture().search_result, result);
}

#[test]
fn search_result_rejects_unknown_record_type() {
    let raw = load_fixture_raw_value();
    let mut result = fixture_section(&raw, "search_result");
    result["type"] = Value::String("plugin".to_string());
    assert!(
        serde_json::from_value::<SearchResult>(result).is_err(),
        "record type must be one of the known kinds"
    );
}

#[test]
fn toc_entry_roundtrip_keeps_null_files_and_nesting() {
    let fixture = load_fixture();
    let raw = load_fixture_raw_value();
    assert_eq!(fixture.toc_entry.node_count(), 2);
    assert!(fixture.toc_entry.children[0].file.is_none());

    let serialized = serde_json::to_value(&fixture.toc_entry).expect("serialize toc entry");
    assert_eq!(serialized, fixture_section(&raw, "toc_entry"));
}

#[test]
fn error_payload_matches_missing_category_contract() {
    let fixture = load_fixture();

    let payload = DocScopeError::NotFound("category 'samples'".to_string())
        .to_payload("search", None);
    let mut serialized = serde_json::to_value(payload).expect("serialize error payload");

    let trace_id = serialized
        .get("trace_id")
        .and_then(Value::as_str)
        .expect("trace_id");
    assert!(Uuid::parse_str(trace_id).is_ok(), "trace_id must be a uuid");
    serialized["trace_id"] = Value::String(FIXED_TRACE_ID.to_string());

    assert_eq!(serialized, fixture.error_payload_missing_category);
}
