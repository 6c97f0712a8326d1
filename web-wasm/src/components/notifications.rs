//! 通知（トースト）コンポーネント

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use resume_parser_common::notice::{self, NoticeKind, NoticeQueue};
use resume_parser_common::{ClientConfig, Error};

/// 通知を出してタイマーで消す
#[derive(Clone, Copy)]
pub struct Notifier {
    notices: RwSignal<NoticeQueue>,
    duration_ms: u32,
    fade_ms: u32,
}

impl Notifier {
    pub fn new(notices: RwSignal<NoticeQueue>, config: &ClientConfig) -> Self {
        Self {
            notices,
            duration_ms: config.notice_duration_ms,
            fade_ms: config.notice_fade_ms,
        }
    }

    pub fn error(&self, error: &Error) {
        self.push(NoticeKind::Error, notice::error_message(error));
    }

    pub fn success(&self, message: &str) {
        self.push(NoticeKind::Success, message.to_string());
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let mut id = 0;
        self.notices.update(|queue| id = queue.push(kind, message));

        let notices = self.notices;
        let fade_ms = self.fade_ms;
        Timeout::new(self.duration_ms, move || {
            notices.update(|queue| {
                queue.start_leaving(id);
            });
            Timeout::new(fade_ms, move || notices.update(|queue| queue.remove(id))).forget();
        })
        .forget();
    }
}

#[component]
pub fn NoticeStack(notices: ReadSignal<NoticeQueue>) -> impl IntoView {
    view! {
        <div class="notice-stack">
            <For
                each=move || notices.with(|queue| queue.notices().to_vec())
                key=|notice| (notice.id, notice.leaving)
                children=|notice| {
                    view! {
                        <div class=notice.css_class() role="alert">
                            <span class="notice-icon">{notice.kind.icon()}</span>
                            <span>{notice.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
