//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Displayはそのまま通知メッセージとして表示される。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select a PDF or DOCX file.")]
    UnsupportedFileType(String),

    #[error("Please select a file first.")]
    NoFileSelected,

    #[error("An upload is already in progress.")]
    UploadInProgress,

    #[error(
        "HTTP error! status: {status}{}",
        .detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
    )]
    HttpStatus { status: u16, detail: Option<String> },

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Server(String),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected response format")]
    UnexpectedPayload,

    #[error("Failed to copy data to clipboard.")]
    Clipboard(String),

    #[error("Failed to export JSON: {0}")]
    Export(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// アップロード要求の失敗（サーバー・通信・レスポンス不正）かどうか
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Error::HttpStatus { .. }
                | Error::Network(_)
                | Error::Server(_)
                | Error::Json(_)
                | Error::UnexpectedPayload
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
