//! JsValueエラーの文字列化

use wasm_bindgen::{JsCast, JsValue};

/// JSの例外からメッセージを取り出す（`Error.message` 優先）
pub fn message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_message_from_error_object() {
        let error = js_sys::Error::new("Failed to fetch");
        assert_eq!(message(&error.into()), "Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_message_from_string() {
        assert_eq!(message(&JsValue::from_str("denied")), "denied");
    }
}
