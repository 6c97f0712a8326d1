//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Resume Parser"</h1>
            <p class="text-muted">"Upload a resume to extract contact details, skills, experience and more"</p>
        </header>
    }
}
