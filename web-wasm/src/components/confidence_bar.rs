//! 信頼度バーコンポーネント

use leptos::prelude::*;
use resume_parser_common::ConfidenceDisplay;

#[component]
pub fn ConfidenceBar(confidence: ConfidenceDisplay) -> impl IntoView {
    view! {
        <div class="confidence-container">
            <div class="confidence-header">
                <span>"Confidence Score"</span>
                <span class="confidence-score">{confidence.label()}</span>
            </div>
            <div class="confidence-bar">
                <div
                    class=format!("confidence-fill {}", confidence.tier.css_class())
                    style=format!("width: {}", confidence.bar_width())
                />
            </div>
        </div>
    }
}
