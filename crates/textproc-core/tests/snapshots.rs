//! Snapshot tests pinning the FFI envelope shape.

use textproc_core::{ResponseEnvelope, TextprocError};

#[test]
fn snapshot_input_too_long_envelope() {
    let err = TextprocError::input_too_long(12, 5);
    insta::assert_json_snapshot!(ResponseEnvelope::error(&err), @r#"
    {
      "ok": false,
      "error": {
        "code": "input_too_long",
        "message": "Text too long: 12 characters (max 5)"
      }
    }
    "#);
}

#[test]
fn snapshot_batch_failure_envelope() {
    let err = TextprocError::input_too_long(30, 10).at_index(2);
    insta::assert_json_snapshot!(ResponseEnvelope::error(&err), @r#"
    {
      "ok": false,
      "error": {
        "code": "input_too_long",
        "message": "Text too long: 30 characters (max 10)",
        "details": "index 2"
      }
    }
    "#);
}

#[test]
fn snapshot_invalid_field_envelope() {
    let err = TextprocError::invalid_field("text", "a string");
    insta::assert_json_snapshot!(ResponseEnvelope::error(&err), @r#"
    {
      "ok": false,
      "error": {
        "code": "invalid_field",
        "message": "Invalid value for 'text': expected a string"
      }
    }
    "#);
}
