//! 通知（トースト）
//!
//! 表示 → 一定時間後にフェードアウト開始（leaving） → 削除、の順で遷移する。
//! タイマー自体はWeb側が持つ。

use crate::error::Error;

pub const EXPORT_DONE: &str = "JSON file downloaded successfully!";
pub const COPY_DONE: &str = "Data copied to clipboard!";

const REQUEST_FAILURE_PREFIX: &str = "Failed to parse resume";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Error => "notice-error",
            NoticeKind::Success => "notice-success",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Error => "⚠",
            NoticeKind::Success => "✔",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
    pub leaving: bool,
}

impl Notice {
    pub fn css_class(&self) -> String {
        let mut class = format!("notice {}", self.kind.css_class());
        if self.leaving {
            class.push_str(" leaving");
        }
        class
    }
}

/// エラーを通知文言に変換
///
/// アップロード失敗は "Failed to parse resume: ..." の形にする
pub fn error_message(error: &Error) -> String {
    if error.is_request_failure() {
        format!("{}: {}", REQUEST_FAILURE_PREFIX, error)
    } else {
        error.to_string()
    }
}

/// 表示中の通知一覧
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });
        id
    }

    pub fn push_error(&mut self, error: &Error) -> u64 {
        self.push(NoticeKind::Error, error_message(error))
    }

    pub fn push_success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    /// フェードアウト開始。該当IDがなければ `false`
    pub fn start_leaving(&mut self, id: u64) -> bool {
        match self.notices.iter_mut().find(|n| n.id == id) {
            Some(notice) => {
                notice.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
