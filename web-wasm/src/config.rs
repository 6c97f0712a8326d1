//! ページ側設定の読み込み
//!
//! index.html で `window.resumeParserConfig = { endpoint: "..." }` のように
//! 定義されていれば、その値でデフォルトを上書きする。

use crate::js_error;
use resume_parser_common::{ClientConfig, Error, Result};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "resumeParserConfig";

/// 設定を読み込む。失敗時はデフォルト値とエラーを返す
pub fn load() -> (ClientConfig, Option<Error>) {
    match read_override() {
        Ok(Some(config)) => (config, None),
        Ok(None) => (ClientConfig::default(), None),
        Err(e) => (ClientConfig::default(), Some(e)),
    }
}

fn read_override() -> Result<Option<ClientConfig>> {
    let window = web_sys::window().ok_or_else(|| Error::Config("window is unavailable".into()))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| Error::Config(js_error::message(&e)))?;

    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let config: ClientConfig =
        serde_wasm_bindgen::from_value(value).map_err(|e| Error::Config(e.to_string()))?;
    config.validate()?;
    Ok(Some(config))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_global(value: &JsValue) {
        let window = web_sys::window().expect("windowがない");
        js_sys::Reflect::set(&window, &JsValue::from_str(CONFIG_GLOBAL), value)
            .expect("グローバル設定に失敗");
    }

    #[wasm_bindgen_test]
    fn wasm_load_override_and_fallback() {
        set_global(&JsValue::UNDEFINED);
        let (config, issue) = load();
        assert_eq!(config, ClientConfig::default());
        assert!(issue.is_none());

        let object = js_sys::Object::new();
        js_sys::Reflect::set(
            &object,
            &JsValue::from_str("endpoint"),
            &JsValue::from_str("https://parser.example.com/upload"),
        )
        .unwrap();
        set_global(&object);
        let (config, issue) = load();
        assert_eq!(config.endpoint, "https://parser.example.com/upload");
        assert_eq!(config.notice_duration_ms, 3000);
        assert!(issue.is_none());

        js_sys::Reflect::set(&object, &JsValue::from_str("endpoint"), &JsValue::from_str("file:///x"))
            .unwrap();
        let (config, issue) = load();
        assert_eq!(config, ClientConfig::default());
        assert!(matches!(issue, Some(Error::Config(_))));

        set_global(&JsValue::UNDEFINED);
    }
}
