//! 解析中インジケータ

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner" />
            <p class="loading-text">"Parsing your resume..."</p>
        </div>
    }
}
