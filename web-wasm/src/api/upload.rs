//! 解析サーバーへのアップロード
//!
//! `POST {endpoint}` に multipart/form-data（フィールド `file`）で送信する。
//! リトライ・タイムアウト・キャンセルはしない（ブラウザ既定に任せる）。

use crate::js_error;
use resume_parser_common::upload::UPLOAD_FIELD;
use resume_parser_common::{interpret_response, Error, ParsedDocument, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// ファイルを送信して解析結果を受け取る
///
/// # Errors
/// - 通信例外: `Error::Network`
/// - それ以外は `interpret_response` に従う
pub async fn upload_resume(endpoint: &str, file: &File) -> Result<ParsedDocument> {
    let (status, body) = post_file(endpoint, file)
        .await
        .map_err(|e| Error::Network(js_error::message(&e)))?;

    tracing::debug!(status, bytes = body.len(), "レスポンス受信");
    interpret_response(status, &body)
}

async fn post_file(endpoint: &str, file: &File) -> std::result::Result<(u16, String), JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())?;

    // Content-Typeはブラウザがboundary付きで設定する
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use resume_parser_common::upload::PDF_MIME;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pdf_file() -> File {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str("%PDF-1.4"));
        let props = web_sys::FilePropertyBag::new();
        props.set_type(PDF_MIME);
        File::new_with_str_sequence_and_options(&parts, "cv.pdf", &props).expect("File作成失敗")
    }

    #[wasm_bindgen_test]
    async fn wasm_unreachable_endpoint_is_network_error() {
        let result = upload_resume("http://127.0.0.1:9/upload", &pdf_file()).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[wasm_bindgen_test]
    async fn wasm_invalid_url_is_network_error() {
        let result = upload_resume("http://[invalid/upload", &pdf_file()).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }
}
