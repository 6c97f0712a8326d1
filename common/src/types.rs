//! 解析結果の型定義
//!
//! 解析サーバー（`/upload`）が返すJSONを表示用に型付けしたもの。
//! サーバー側の出力は揺れがあるため、すべてのフィールドを寛容に読み込む:
//! - 文字列フィールド: 文字列・数値・真偽値を受け付け、null/空文字は未設定扱い
//! - リスト: 配列以外は空リスト扱い、不正な要素はスキップ
//! - 信頼度: 数値または数値文字列、それ以外は0

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::js_number::number_text;

/// 職歴エントリ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient::text")]
    pub role: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub company: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub dates: Option<String>,
}

/// 学歴エントリ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient::text")]
    pub degree: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub institution: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub year: Option<String>, // 数値で返る場合もある
}

/// 解析済みレジュメ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,

    #[serde(deserialize_with = "lenient::text")]
    pub linkedin: Option<String>,

    #[serde(deserialize_with = "lenient::text_list")]
    pub skills: Vec<String>,

    #[serde(deserialize_with = "lenient::entries")]
    pub experience: Vec<Experience>,

    #[serde(deserialize_with = "lenient::entries")]
    pub education: Vec<Education>,

    #[serde(deserialize_with = "lenient::text_list")]
    pub projects: Vec<String>,

    #[serde(deserialize_with = "lenient::text_list")]
    pub certifications: Vec<String>,

    #[serde(deserialize_with = "lenient::score")]
    pub confidence_score: f64, // 0-100
}

impl ParsedResume {
    /// JSON値から読み込む（トップレベルがオブジェクトであること）
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        Self::deserialize(value).ok()
    }
}

/// スカラー値を表示用文字列に変換
///
/// 空文字・null・配列・オブジェクトは`None`
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

mod lenient {
    use super::*;
    use serde::de::DeserializeOwned;

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(scalar_text(&value))
    }

    pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(items.iter().filter_map(scalar_text).collect()),
            _ => Ok(Vec::new()),
        }
    }

    pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    pub fn score<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let score = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        };
        Ok(if score.is_finite() { score } else { 0.0 })
    }
}
