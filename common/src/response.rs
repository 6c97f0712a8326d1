//! 解析サーバーのレスポンス解釈
//!
//! `/upload` のレスポンスは次のいずれか:
//! - 2xx + 解析結果オブジェクト
//! - 2xx + `{"error": "..."}`
//! - 非2xx（FastAPIの場合 `{"detail": "..."}` を伴う）

use crate::error::{Error, Result};
use crate::js_number;
use crate::types::{scalar_text, ParsedResume};
use serde_json::Value;

/// 受信した解析結果
///
/// `raw` は受信したJSONそのもの（キー順・未知フィールドを保持）で、
/// エクスポートとコピーはこちらを使う。
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    pub raw: Value,
    pub resume: ParsedResume,
}

impl ParsedDocument {
    pub fn from_value(raw: Value) -> Result<Self> {
        let resume = ParsedResume::from_value(&raw).ok_or(Error::UnexpectedPayload)?;
        Ok(Self { raw, resume })
    }

    /// 2スペースインデントのJSON（`JSON.stringify(v, null, 2)` と同じ形）
    pub fn to_pretty_json(&self) -> Result<String> {
        js_number::to_pretty_string(&self.raw)
    }
}

/// ステータスコードと本文から結果を取り出す
///
/// # Errors
/// - 非2xx: `Error::HttpStatus`
/// - 本文がJSONでない: `Error::Json`
/// - `error` フィールドが真値: `Error::Server`
/// - オブジェクト以外: `Error::UnexpectedPayload`
pub fn interpret_response(status: u16, body: &str) -> Result<ParsedDocument> {
    if !(200..300).contains(&status) {
        return Err(Error::HttpStatus {
            status,
            detail: error_detail(body),
        });
    }

    let value: Value = serde_json::from_str(body)?;

    if let Some(message) = value.get("error").and_then(server_error_message) {
        return Err(Error::Server(message));
    }

    ParsedDocument::from_value(value)
}

/// `error` フィールドが真値ならメッセージを返す
fn server_error_message(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        other => scalar_text(other),
    }
}

/// 非2xx本文の `detail` を取り出す
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("detail").and_then(scalar_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_body() {
        let body = r#"{"name": "Jane", "skills": ["Rust"], "confidence_score": 85}"#;
        let doc = interpret_response(200, body).expect("解析成功のはず");
        assert_eq!(doc.resume.name.as_deref(), Some("Jane"));
        assert_eq!(doc.raw["skills"], json!(["Rust"]));
    }

    #[test]
    fn test_error_field() {
        let result = interpret_response(200, r#"{"error": "bad format"}"#);
        assert!(matches!(result, Err(Error::Server(ref m)) if m == "bad format"));
    }

    #[test]
    fn test_falsy_error_field_is_ignored() {
        for body in [
            r#"{"error": "", "name": "A"}"#,
            r#"{"error": null, "name": "A"}"#,
            r#"{"error": false, "name": "A"}"#,
            r#"{"error": 0, "name": "A"}"#,
        ] {
            let doc = interpret_response(200, body).expect("falsyなerrorは無視");
            assert_eq!(doc.resume.name.as_deref(), Some("A"));
        }
    }

    #[test]
    fn test_truthy_non_string_error_field() {
        let result = interpret_response(200, r#"{"error": true}"#);
        assert!(matches!(result, Err(Error::Server(ref m)) if m == "true"));

        let result = interpret_response(200, r#"{"error": {"code": 7}}"#);
        assert!(matches!(result, Err(Error::Server(ref m)) if m == r#"{"code":7}"#));
    }

    #[test]
    fn test_http_status_with_detail() {
        let body = r#"{"detail": "Only PDF and DOCX files are supported."}"#;
        match interpret_response(400, body) {
            Err(Error::HttpStatus { status, detail }) => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("Only PDF and DOCX files are supported."));
            }
            other => panic!("HttpStatusのはず: {:?}", other),
        }
    }

    #[test]
    fn test_http_status_without_json_body() {
        let result = interpret_response(502, "<html>Bad Gateway</html>");
        assert!(matches!(result, Err(Error::HttpStatus { status: 502, detail: None })));
    }

    #[test]
    fn test_invalid_json() {
        let result = interpret_response(200, "not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_non_object_payload() {
        let result = interpret_response(200, "[1, 2, 3]");
        assert!(matches!(result, Err(Error::UnexpectedPayload)));
    }

    #[test]
    fn test_pretty_json_matches_js_stringify_layout() {
        let body = r#"{"name":"Jane","skills":[],"extra":{"a":1},"confidence_score":85}"#;
        let doc = interpret_response(200, body).unwrap();
        let expected = "{\n  \"name\": \"Jane\",\n  \"skills\": [],\n  \"extra\": {\n    \"a\": 1\n  },\n  \"confidence_score\": 85\n}";
        assert_eq!(doc.to_pretty_json().unwrap(), expected);
    }

    #[test]
    fn test_pretty_json_float_scores() {
        // Pythonのfloatがそのまま届くケース
        let body = r#"{"name":"Jane","education":[{"year":2021.0}],"confidence_score":100.0}"#;
        let doc = interpret_response(200, body).unwrap();
        let expected = "{\n  \"name\": \"Jane\",\n  \"education\": [\n    {\n      \"year\": 2021\n    }\n  ],\n  \"confidence_score\": 100\n}";
        assert_eq!(doc.to_pretty_json().unwrap(), expected);
    }
}
