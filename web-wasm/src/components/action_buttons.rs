//! アクションボタンコンポーネント

use leptos::prelude::*;

use crate::app::Phase;

#[component]
pub fn ActionButtons<FA, FU>(
    phase: ReadSignal<Phase>,
    api_key: ReadSignal<String>,
    on_analyze: FA,
    on_upload_another: FU,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FU: Fn(()) + 'static + Clone,
{
    let is_loading = move || phase.get() == Phase::Loading;
    // 解析中は再解析を受け付けない
    let can_analyze = move || !is_loading() && !api_key.get().is_empty();

    view! {
        <div class="action-buttons">
            <button
                class="btn btn-primary"
                disabled=move || !can_analyze()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_loading() { "Analyzing..." } else { "Identify Font" }}
            </button>

            <button
                class="btn btn-secondary"
                on:click={
                    let on_upload_another = on_upload_another.clone();
                    move |_| on_upload_another(())
                }
            >
                "Upload Another Image"
            </button>
        </div>
    }
}
