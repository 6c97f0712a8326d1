//! JSONファイルとしてダウンロード
//!
//! Blob → Object URL → 一時的な<a download>をクリック、の順で保存させる。

use crate::js_error;
use resume_parser_common::{Error, Result};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const JSON_MIME: &str = "application/json";

/// JSON文字列をファイルとして保存させる
pub fn download_json(file_name: &str, json: &str) -> Result<()> {
    save_blob(file_name, json).map_err(|e| Error::Export(js_error::message(&e)))
}

fn save_blob(file_name: &str, json: &str) -> std::result::Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(json));

    let props = BlobPropertyBag::new();
    props.set_type(JSON_MIME);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &props)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document body is unavailable"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Url::revoke_object_url(&url)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_download_leaves_no_anchor_behind() {
        let document = web_sys::window().unwrap().document().unwrap();
        let before = document.get_elements_by_tag_name("a").length();

        download_json("parsed_resume.json", "{\n  \"name\": \"Jane\"\n}").expect("ダウンロード失敗");

        assert_eq!(document.get_elements_by_tag_name("a").length(), before);
    }
}
