//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AI Font Identifier"</h1>
            <p class="tagline">
                "Upload an image containing text and instantly identify the fonts used"
            </p>
        </header>
    }
}
