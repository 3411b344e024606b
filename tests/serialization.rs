//! JSON shape of spans and vocabulary entries.

use lettertok::{builtin, special_ids, EncodeOptions, TokenKind};
use serde_json::{json, Value};

#[test]
fn test_span_json_shape() {
    let spans = builtin()
        .encode_with_spans("how?", EncodeOptions::default())
        .unwrap();
    let value = serde_json::to_value(&spans).unwrap();
    assert_eq!(
        value,
        json!([
            {"id": 196, "text": "how", "start": 0, "end": 3, "original_text": "how", "kind": "word"},
            {"id": 195, "text": "?", "start": 3, "end": 4, "original_text": "?", "kind": "character"},
        ])
    );
}

#[test]
fn test_placeholder_span_kind() {
    let spans = builtin()
        .encode_with_spans("€", EncodeOptions::new().unknown_id(0))
        .unwrap();
    let value = serde_json::to_value(&spans[0]).unwrap();
    assert_eq!(value["kind"], "unknown");
    assert_eq!(value["text"], "");
    assert_eq!(value["end"], 3);
}

#[test]
fn test_vocab_entry_json_shape() {
    let entry = builtin()
        .vocab()
        .entries()
        .iter()
        .find(|e| e.id == special_ids::PIYUSH_HAS_GIRLFRIEND)
        .unwrap();
    let value: Value = serde_json::to_value(entry).unwrap();
    assert_eq!(
        value,
        json!({"token": "Piyush has Girlfriend", "id": 404, "kind": "special"})
    );
}

#[test]
fn test_token_kind_parses_lowercase_names() {
    for kind in [
        TokenKind::Special,
        TokenKind::Character,
        TokenKind::Word,
        TokenKind::Unknown,
    ] {
        let parsed: TokenKind = serde_json::from_value(json!(kind.as_str())).unwrap();
        assert_eq!(parsed, kind);
    }
    assert!(serde_json::from_value::<TokenKind>(json!("Word")).is_err());
}
