//! クライアント設定
//!
//! ページ側で `window.resumeParserConfig` を定義すると各項目を上書きできる。
//! 未指定の項目はデフォルト値。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/upload";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// 解析サーバーのアップロードURL
    pub endpoint: String,
    /// 通知が表示されている時間（ミリ秒）
    pub notice_duration_ms: u32,
    /// フェードアウトから削除までの時間（ミリ秒）
    pub notice_fade_ms: u32,
    pub export_file_name: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            notice_duration_ms: 3000,
            notice_fade_ms: 500,
            export_file_name: "parsed_resume.json".into(),
            log_level: "info".into(),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::Config("endpoint is empty".into()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(Error::Config(format!("endpoint must be http(s): {}", endpoint)));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(Error::Config("exportFileName is empty".into()));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::Config(format!("unknown logLevel: {}", self.log_level)));
        }
        Ok(())
    }

    /// JSON文字列から読み込んで検証する
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ClientConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
