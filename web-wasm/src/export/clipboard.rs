//! クリップボードへのコピー

use crate::js_error;
use resume_parser_common::{Error, Result};
use wasm_bindgen_futures::JsFuture;

pub async fn copy_text(text: &str) -> Result<()> {
    let window =
        web_sys::window().ok_or_else(|| Error::Clipboard("window is unavailable".into()))?;
    let promise = window.navigator().clipboard().write_text(text);

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| Error::Clipboard(js_error::message(&e)))
}
