//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイル選択ダイアログの両方を受け付ける。
//! `on_file` が `false` を返したファイル（PDF/DOCX以外）は input に残さない。

use leptos::ev::DragEvent;
use leptos::html;
use leptos::prelude::*;
use resume_parser_common::upload::ACCEPT_ATTR;
use resume_parser_common::SelectedFile;
use web_sys::{File, FileList, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    selected: Signal<Option<SelectedFile>>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) -> bool + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
                return;
            };
            accept_drop(&files, input_ref.get_untracked().as_ref(), &on_file);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
    };

    let on_change = {
        let on_file = on_file.clone();
        move |_| {
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if !on_file(file) {
                input.set_value("");
            }
        }
    };

    // input はエリアの外に置く（クリックがエリアへ伝播して再度開かないように）
    let on_click = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if selected.get().is_some() {
                    classes.push("has-file");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            {move || match selected.get() {
                Some(file) => view! {
                    <div class="upload-icon selected">"✔"</div>
                    <p class="file-name">{file.name.clone()}</p>
                    <p class="text-muted">{file.size_label()}</p>
                }
                .into_any(),
                None => view! {
                    <div class="upload-icon">"📄"</div>
                    <p>"Drag & drop your resume here, or click to browse"</p>
                    <p class="text-muted">"Supported formats: PDF, DOCX"</p>
                }
                .into_any(),
            }}
        </div>
        <input
            type="file"
            name="file"
            class="hidden"
            accept=ACCEPT_ATTR
            node_ref=input_ref
            on:change=on_change
        />
    }
}

/// ドロップされた先頭ファイルを渡し、受け付けられたときだけ input に反映する
fn accept_drop<F>(files: &FileList, input: Option<&HtmlInputElement>, on_file: &F) -> bool
where
    F: Fn(File) -> bool,
{
    let Some(file) = files.get(0) else {
        return false;
    };
    if !on_file(file) {
        return false;
    }
    if let Some(input) = input {
        input.set_files(Some(files));
    }
    true
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use resume_parser_common::upload::PDF_MIME;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_test::*;
    use web_sys::{DataTransfer, FilePropertyBag};

    wasm_bindgen_test_configure!(run_in_browser);

    fn dropped(name: &str, mime: &str) -> FileList {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str("content"));
        let props = FilePropertyBag::new();
        props.set_type(mime);
        let file = File::new_with_str_sequence_and_options(&parts, name, &props).expect("File作成失敗");

        let transfer = DataTransfer::new().expect("DataTransfer作成失敗");
        transfer.items().add_with_file(&file).expect("ファイル追加失敗");
        transfer.files().expect("FileListがない")
    }

    fn file_input() -> HtmlInputElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
        input.set_type("file");
        input
    }

    fn is_supported(file: File) -> bool {
        SelectedFile::new(file.name(), file.size() as u64, &file.type_()).is_ok()
    }

    #[wasm_bindgen_test]
    fn wasm_rejected_drop_leaves_input_empty() {
        let input = file_input();
        let accepted = accept_drop(&dropped("photo.png", "image/png"), Some(&input), &is_supported);

        assert!(!accepted);
        assert_eq!(input.files().map(|f| f.length()).unwrap_or(0), 0);
    }

    #[wasm_bindgen_test]
    fn wasm_accepted_drop_fills_input() {
        let input = file_input();
        let accepted = accept_drop(&dropped("cv.pdf", PDF_MIME), Some(&input), &is_supported);

        assert!(accepted);
        let files = input.files().expect("FileListがない");
        assert_eq!(files.length(), 1);
        assert_eq!(files.get(0).map(|f| f.name()).as_deref(), Some("cv.pdf"));
    }
}
