//! エクスポートボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ExportButtons<FE, FC>(
    has_result: Signal<bool>,
    on_export: FE,
    on_copy: FC,
) -> impl IntoView
where
    FE: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div class="export-buttons">
            <button
                type="button"
                class="btn btn-secondary"
                disabled=move || !has_result.get()
                on:click={
                    let on_export = on_export.clone();
                    move |_| on_export(())
                }
            >
                "Export JSON"
            </button>

            <button
                type="button"
                class="btn btn-secondary"
                disabled=move || !has_result.get()
                on:click={
                    let on_copy = on_copy.clone();
                    move |_| on_copy(())
                }
            >
                "Copy Data"
            </button>
        </div>
    }
}
