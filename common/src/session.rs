//! ページコントローラの状態
//!
//! 選択中ファイル、アップロード中フラグ、最後に成功した解析結果を保持する。
//! ブラウザのメインスレッドからのみ操作される。

use crate::error::{Error, Result};
use crate::response::ParsedDocument;
use crate::upload::SelectedFile;

/// アップロード状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Uploading,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    selected: Option<SelectedFile>,
    phase: Phase,
    last_result: Option<ParsedDocument>,
    results_visible: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// MIMEタイプを検証して選択する。検証に失敗した場合は選択状態を変えない
    pub fn select_checked(&mut self, name: &str, size_bytes: u64, mime: &str) -> Result<&SelectedFile> {
        let file = SelectedFile::new(name, size_bytes, mime)?;
        Ok(&*self.selected.insert(file))
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_uploading(&self) -> bool {
        self.phase == Phase::Uploading
    }

    /// 解析ボタンを押せるか
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_uploading()
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn last_result(&self) -> Option<&ParsedDocument> {
        self.last_result.as_ref()
    }

    /// アップロード開始。結果表示は隠す
    pub fn begin_upload(&mut self) -> Result<SelectedFile> {
        if self.is_uploading() {
            return Err(Error::UploadInProgress);
        }
        let file = self.selected.clone().ok_or(Error::NoFileSelected)?;
        self.phase = Phase::Uploading;
        self.results_visible = false;
        Ok(file)
    }

    /// アップロード完了。成功時のみ最終結果を置き換える
    pub fn finish_upload(&mut self, outcome: Result<ParsedDocument>) -> Result<()> {
        self.phase = Phase::Idle;
        let document = outcome?;
        self.last_result = Some(document);
        self.results_visible = true;
        Ok(())
    }

    /// エクスポート/コピー用のJSON。結果がなければ `None`
    pub fn export_json(&self) -> Option<Result<String>> {
        self.last_result.as_ref().map(ParsedDocument::to_pretty_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::PDF_MIME;
    use serde_json::json;

    fn document() -> ParsedDocument {
        ParsedDocument::from_value(json!({"name": "Jane", "confidence_score": 85})).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.can_submit());
        assert!(!session.results_visible());
        assert!(session.export_json().is_none());
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut session = Session::new();
        session.select_checked("a.pdf", 10, PDF_MIME).unwrap();

        let result = session.select_checked("b.png", 10, "image/png");
        assert!(matches!(result, Err(Error::UnsupportedFileType(_))));
        assert_eq!(session.selected().map(|f| f.name.as_str()), Some("a.pdf"));
    }

    #[test]
    fn test_finish_without_document_returns_error() {
        let mut session = Session::new();
        session.select_checked("a.pdf", 10, PDF_MIME).unwrap();
        session.begin_upload().unwrap();

        let result = session.finish_upload(Err(Error::NoFileSelected));
        assert!(matches!(result, Err(Error::NoFileSelected)));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.last_result().is_none());
    }

    #[test]
    fn test_begin_without_file() {
        let mut session = Session::new();
        assert!(matches!(session.begin_upload(), Err(Error::NoFileSelected)));
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn test_no_concurrent_uploads() {
        let mut session = Session::new();
        session.select_checked("a.pdf", 10, PDF_MIME).unwrap();
        session.begin_upload().unwrap();
        assert!(!session.can_submit());
        assert!(matches!(session.begin_upload(), Err(Error::UploadInProgress)));
    }

    #[test]
    fn test_failure_restores_idle_and_keeps_last_result() {
        let mut session = Session::new();
        session.select_checked("a.pdf", 10, PDF_MIME).unwrap();
        session.begin_upload().unwrap();
        session.finish_upload(Ok(document())).unwrap();

        session.begin_upload().unwrap();
        assert!(!session.results_visible());
        let result = session.finish_upload(Err(Error::Server("bad format".into())));

        assert!(matches!(result, Err(Error::Server(_))));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.can_submit());
        assert!(!session.results_visible());
        assert!(session.last_result().is_some());
    }
}
