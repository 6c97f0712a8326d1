//! メインアプリケーションコンポーネント
//!
//! 画面の状態はすべて `Session` 1つに集約し、RwSignalで保持する。
//! `web_sys::File` はSendでないため、ファイル本体だけローカルシグナルに置く。

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::leptos_dom::helpers::request_animation_frame;
use leptos::prelude::*;
use leptos::task::spawn_local;
use resume_parser_common::notice::{COPY_DONE, EXPORT_DONE};
use resume_parser_common::{ClientConfig, Error, NoticeQueue, ResumeView, Session};
use web_sys::{File, ScrollBehavior, ScrollIntoViewOptions};

use crate::api::upload::upload_resume;
use crate::components::{
    export_buttons::ExportButtons,
    header::Header,
    loading::LoadingIndicator,
    notifications::{NoticeStack, Notifier},
    results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use crate::export::{clipboard, download};

/// メインアプリケーションコンポーネント
#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let config = StoredValue::new(config);

    // アプリケーション状態
    let session = RwSignal::new(Session::new());
    let file_handle = RwSignal::new_local(None::<File>);
    let notices = RwSignal::new(NoticeQueue::new());
    let notifier = config.with_value(|c| Notifier::new(notices, c));
    let results_ref = NodeRef::<html::Section>::new();

    let selected = Signal::derive(move || session.with(|s| s.selected().cloned()));
    let can_submit = Signal::derive(move || session.with(Session::can_submit));
    let is_uploading = Signal::derive(move || session.with(Session::is_uploading));
    let results_visible = Signal::derive(move || session.with(Session::results_visible));
    let has_result = Signal::derive(move || session.with(|s| s.last_result().is_some()));
    let resume_view = Memo::new(move |_| {
        session.with(|s| s.last_result().map(|doc| ResumeView::from(&doc.resume)))
    });

    // ファイル選択/ドロップ。受け付けたら true
    let on_file = move |file: File| -> bool {
        let mut checked = Err(Error::NoFileSelected);
        session.update(|s| {
            checked = s
                .select_checked(&file.name(), file.size() as u64, &file.type_())
                .cloned();
        });
        match checked {
            Ok(selected) => {
                tracing::info!(file = %selected.name, size = selected.size_bytes, "ファイルを選択");
                file_handle.set(Some(file));
                true
            }
            Err(e) => {
                tracing::warn!(file = %file.name(), mime = %file.type_(), "対応していないファイル形式");
                notifier.error(&e);
                false
            }
        }
    };

    // 解析開始
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let mut started = Err(Error::NoFileSelected);
        session.update(|s| started = s.begin_upload());
        let selected = match started {
            Ok(selected) => selected,
            Err(e) => {
                notifier.error(&e);
                return;
            }
        };

        let Some(file) = file_handle.get_untracked() else {
            let mut finished = Ok(());
            session.update(|s| finished = s.finish_upload(Err(Error::NoFileSelected)));
            if let Err(e) = finished {
                notifier.error(&e);
            }
            return;
        };

        let endpoint = config.with_value(|c| c.endpoint.clone());
        tracing::info!(file = %selected.name, kind = ?selected.kind, endpoint = %endpoint, "アップロード開始");

        spawn_local(async move {
            let outcome = upload_resume(&endpoint, &file).await;

            let mut finished = Ok(());
            session.update(|s| finished = s.finish_upload(outcome));

            match finished {
                Ok(()) => {
                    tracing::info!(file = %selected.name, "解析完了");
                    request_animation_frame(move || scroll_into_view(results_ref));
                }
                Err(e) => {
                    tracing::warn!(file = %selected.name, error = %e, "解析失敗");
                    notifier.error(&e);
                }
            }
        });
    };

    // JSON出力
    let on_export = move |_| {
        let Some(json) = session.with_untracked(Session::export_json) else {
            return;
        };
        let result = json.and_then(|text| {
            config.with_value(|c| download::download_json(&c.export_file_name, &text))
        });
        match result {
            Ok(()) => {
                tracing::info!("JSONをダウンロード");
                notifier.success(EXPORT_DONE);
            }
            Err(e) => {
                tracing::warn!(error = %e, "JSON出力に失敗");
                notifier.error(&e);
            }
        }
    };

    // クリップボードへコピー
    let on_copy = move |_| {
        let Some(json) = session.with_untracked(Session::export_json) else {
            return;
        };
        spawn_local(async move {
            let result = match json {
                Ok(text) => clipboard::copy_text(&text).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    tracing::info!("クリップボードへコピー");
                    notifier.success(COPY_DONE);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "コピーに失敗");
                    notifier.error(&e);
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <form class="upload-form" on:submit=on_submit>
                <UploadArea selected=selected on_file=on_file />

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || !can_submit.get()
                >
                    {move || if is_uploading.get() { "Parsing..." } else { "Parse Resume" }}
                </button>
            </form>

            <Show when=move || is_uploading.get()>
                <LoadingIndicator />
            </Show>

            <section
                class="results"
                class:hidden=move || !results_visible.get()
                node_ref=results_ref
            >
                <ResultsPanel resume=resume_view />
                <ExportButtons has_result=has_result on_export=on_export on_copy=on_copy />
            </section>

            <NoticeStack notices=notices.read_only() />
        </div>
    }
}

fn scroll_into_view(target: NodeRef<html::Section>) {
    if let Some(element) = target.get_untracked() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
