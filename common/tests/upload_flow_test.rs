//! アップロード〜表示〜エクスポートの一連の流れのテスト
//!
//! Web側はこの状態遷移をそのままシグナルに載せているだけなので、
//! ここで画面の振る舞いを検証する。
//!
//! ## 変更履歴
//! - 2026-10-15: 初期作成
//! - 2026-10-15: エクスポートを浮動小数を含むブラウザ出力と比較

use resume_parser_common::notice::{error_message, NoticeQueue};
use resume_parser_common::upload::{DOCX_MIME, PDF_MIME};
use resume_parser_common::view::NO_SKILLS;
use resume_parser_common::{
    interpret_response, ConfidenceTier, Error, Phase, ResumeView, Section, Session,
};
use serde_json::json;

fn full_body() -> String {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "(555) 123-4567",
        "linkedin": "linkedin.com/in/janedoe",
        "skills": ["Rust", "SQL"],
        "experience": [{"role": "Backend Engineer", "company": "Acme", "dates": "2019"}],
        "education": [{"degree": "BSc Computer Science", "institution": "State University", "year": "2018"}],
        "projects": ["Resume parser"],
        "certifications": [],
        "confidence_score": 85
    })
    .to_string()
}

/// 選択→送信→応答までを実行
fn upload(session: &mut Session, status: u16, body: &str) -> Result<(), Error> {
    session.begin_upload()?;
    let outcome = interpret_response(status, body);
    session.finish_upload(outcome)
}

/// PDF/DOCX以外のドロップは選択状態に入らず、拒否通知を出す
#[test]
fn test_drop_unsupported_type() {
    let mut session = Session::new();
    let mut notices = NoticeQueue::new();

    if let Err(e) = session.select_checked("photo.png", 2048, "image/png") {
        notices.push_error(&e);
    }

    assert!(session.selected().is_none());
    assert!(!session.can_submit());
    assert_eq!(notices.notices().len(), 1);
    assert_eq!(notices.notices()[0].message, "Please select a PDF or DOCX file.");
}

/// 信頼度85は緑・幅85%・"85.0%"
#[test]
fn test_confidence_85_rendering() {
    let mut session = Session::new();
    session.select_checked("cv.pdf", 4096, PDF_MIME).unwrap();
    upload(&mut session, 200, &full_body()).expect("アップロード成功のはず");

    let document = session.last_result().expect("結果が保存されていない");
    let view = ResumeView::from(&document.resume);
    assert_eq!(view.confidence.tier, ConfidenceTier::High);
    assert_eq!(view.confidence.bar_width(), "85%");
    assert_eq!(view.confidence.label(), "85.0%");
    assert!(session.results_visible());
}

/// skills欠落時はプレースホルダ
#[test]
fn test_missing_skills_placeholder() {
    let mut session = Session::new();
    session.select_checked("cv.docx", 4096, DOCX_MIME).unwrap();
    upload(&mut session, 200, r#"{"name": "Jane", "confidence_score": 40}"#).unwrap();

    let view = ResumeView::from(&session.last_result().unwrap().resume);
    assert_eq!(view.skills, Section::Empty(NO_SKILLS));
    assert_eq!(view.confidence.tier, ConfidenceTier::Low);
}

/// エクスポート内容はブラウザの `JSON.stringify(v, null, 2)` と一致
#[test]
fn test_export_equals_js_stringify() {
    let mut session = Session::new();
    session.select_checked("cv.pdf", 4096, PDF_MIME).unwrap();
    let body = r#"{"name":"Jane Doe","skills":["Rust"],"experience":[{"role":"Engineer","company":"Acme","dates":"2019"}],"education":[{"degree":"BSc","year":2018.0}],"certifications":[],"section_scores":{"skills":72.5,"contact":100.0},"confidence_score":85.0}"#;
    upload(&mut session, 200, body).unwrap();

    let exported = session
        .export_json()
        .expect("結果があるのにエクスポートできない")
        .expect("シリアライズ失敗");

    // JSON.stringify(JSON.parse(body), null, 2) の出力
    let expected = r#"{
  "name": "Jane Doe",
  "skills": [
    "Rust"
  ],
  "experience": [
    {
      "role": "Engineer",
      "company": "Acme",
      "dates": "2019"
    }
  ],
  "education": [
    {
      "degree": "BSc",
      "year": 2018
    }
  ],
  "certifications": [],
  "section_scores": {
    "skills": 72.5,
    "contact": 100
  },
  "confidence_score": 85
}"#;
    assert_eq!(exported, expected);
}

/// 成功前はコピー/エクスポートの対象がない
#[test]
fn test_copy_without_result_is_noop() {
    let mut session = Session::new();
    assert!(session.export_json().is_none());

    session.select_checked("cv.pdf", 4096, PDF_MIME).unwrap();
    let _ = upload(&mut session, 500, "");
    assert!(session.export_json().is_none());
}

/// error: "bad format" は通知に表示され、待機状態に戻る
#[test]
fn test_server_error_restores_idle() {
    let mut session = Session::new();
    let mut notices = NoticeQueue::new();
    session.select_checked("cv.pdf", 4096, PDF_MIME).unwrap();

    let result = upload(&mut session, 200, r#"{"error": "bad format"}"#);
    let error = result.expect_err("エラーになるはず");
    notices.push_error(&error);

    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.can_submit());
    assert!(notices.notices()[0].message.contains("bad format"));
    assert_eq!(error_message(&error), "Failed to parse resume: bad format");
}

/// 失敗しても前回の成功結果は残る
#[test]
fn test_last_result_survives_failure() {
    let mut session = Session::new();
    session.select_checked("cv.pdf", 4096, PDF_MIME).unwrap();
    upload(&mut session, 200, &full_body()).unwrap();
    let before = session.export_json().unwrap().unwrap();

    let _ = upload(&mut session, 200, r#"{"error": "Could not extract text from file"}"#);
    assert_eq!(session.export_json().unwrap().unwrap(), before);
    assert!(!session.results_visible());
}

/// 次の成功で結果が置き換わる
#[test]
fn test_next_success_replaces_result() {
    let mut session = Session::new();
    session.select_checked("cv.pdf", 4096, PDF_MIME).unwrap();
    upload(&mut session, 200, &full_body()).unwrap();
    upload(&mut session, 200, r#"{"name": "John Roe"}"#).unwrap();

    let document = session.last_result().unwrap();
    assert_eq!(document.resume.name.as_deref(), Some("John Roe"));
    assert_eq!(document.raw, json!({"name": "John Roe"}));
}
