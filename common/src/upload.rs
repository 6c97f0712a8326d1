//! アップロード対象ファイルの検証

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// multipartのフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// ファイル選択ダイアログの`accept`属性
pub const ACCEPT_ATTR: &str = ".pdf,.docx,application/pdf,application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 受け付けるドキュメント種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// 宣言されたMIMEタイプから判定（拡張子は見ない）
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(DocumentKind::Pdf),
            DOCX_MIME => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => PDF_MIME,
            DocumentKind::Docx => DOCX_MIME,
        }
    }
}

/// 選択済みファイルのメタデータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size_bytes: u64,
    pub kind: DocumentKind,
}

impl SelectedFile {
    /// MIMEタイプを検証して作成
    ///
    /// # Errors
    /// PDF/DOCX以外は`Error::UnsupportedFileType`
    pub fn new(name: impl Into<String>, size_bytes: u64, mime: &str) -> Result<Self> {
        let kind = DocumentKind::from_mime(mime)
            .ok_or_else(|| Error::UnsupportedFileType(mime.to_string()))?;
        Ok(Self {
            name: name.into(),
            size_bytes,
            kind,
        })
    }

    /// "0.12 MB" 形式のサイズ表記
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf() {
        let file = SelectedFile::new("cv.pdf", 1024, PDF_MIME).expect("PDFは受け付ける");
        assert_eq!(file.kind, DocumentKind::Pdf);
        assert_eq!(file.name, "cv.pdf");
    }

    #[test]
    fn test_accepts_docx() {
        let file = SelectedFile::new("cv.docx", 1024, DOCX_MIME).expect("DOCXは受け付ける");
        assert_eq!(file.kind, DocumentKind::Docx);
        assert_eq!(file.kind.mime(), DOCX_MIME);
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["image/png", "application/msword", "text/plain", ""] {
            let result = SelectedFile::new("cv", 10, mime);
            assert!(
                matches!(result, Err(Error::UnsupportedFileType(ref m)) if m == mime),
                "{} を拒否すべき",
                mime
            );
        }
    }

    #[test]
    fn test_extension_alone_is_not_enough() {
        // 拡張子がpdfでもMIMEが違えば拒否
        assert!(SelectedFile::new("cv.pdf", 10, "application/octet-stream").is_err());
    }

    #[test]
    fn test_size_label() {
        let file = SelectedFile::new("cv.pdf", 1_572_864, PDF_MIME).unwrap();
        assert_eq!(file.size_label(), "1.50 MB");

        let small = SelectedFile::new("cv.pdf", 0, PDF_MIME).unwrap();
        assert_eq!(small.size_label(), "0.00 MB");
    }
}
