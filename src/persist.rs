use std::path::Path;

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value as JsonValue};

use crate::error::ReportError;

const JSON_INDENT: &[u8] = b"    ";

/// Pretty-prints `value` with a 4-space indent, UTF-8, keys in document order.
pub fn to_pretty_json(value: &JsonValue) -> Result<Vec<u8>, ReportError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Overwrites `path` with the pretty-printed listing.
pub fn write_json(path: &Path, value: &JsonValue) -> Result<(), ReportError> {
    let bytes = to_pretty_json(value)?;
    std::fs::write(path, bytes).map_err(|e| ReportError::io(path, e))
}

/// Overwrites `path` with the lines joined by `\n` (no trailing newline).
pub fn write_report(path: &Path, lines: &[String]) -> Result<String, ReportError> {
    let content = lines.join("\n");
    std::fs::write(path, &content).map_err(|e| ReportError::io(path, e))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_uses_four_spaces_and_keeps_order() {
        let value: JsonValue =
            serde_json::from_str(r#"{"zeta":1,"alpha":{"b":[1,2],"a":"Ξ"}}"#).unwrap();
        let text = String::from_utf8(to_pretty_json(&value).unwrap()).unwrap();
        let expected = "{\n    \"zeta\": 1,\n    \"alpha\": {\n        \"b\": [\n            1,\n            2\n        ],\n        \"a\": \"Ξ\"\n    }\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_numbers_are_written_as_received() {
        let body = r#"{"price":6.05984709055441102e-5,"id":123456789012345678901234,"change":-0.1}"#;
        let value: JsonValue = serde_json::from_str(body).unwrap();
        let text = String::from_utf8(to_pretty_json(&value).unwrap()).unwrap();
        assert_eq!(
            text,
            "{\n    \"price\": 6.05984709055441102e-5,\n    \"id\": 123456789012345678901234,\n    \"change\": -0.1\n}"
        );
    }

    #[test]
    fn test_write_json_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        write_json(&path, &json!({ "data": {} })).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n    \"data\": {}\n}");
        let back: JsonValue = serde_json::from_str(&text).unwrap();
        assert_eq!(back, json!({ "data": {} }));
    }

    #[test]
    fn test_write_report_joins_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let lines = vec!["a".to_string(), "b ".to_string(), "c".to_string()];

        let content = write_report(&path, &lines).unwrap();
        assert_eq!(content, "a\nb \nc");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb \nc");
    }

    #[test]
    fn test_write_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = write_report(&path, &["x".to_string()]).unwrap_err();
        match err {
            ReportError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
