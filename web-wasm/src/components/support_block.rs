//! サポートリンクコンポーネント

use leptos::prelude::*;

#[component]
pub fn SupportBlock() -> impl IntoView {
    view! {
        <div class="support-block">
            <p>
                "This font identification tool is free to use. If you find it useful, \
                 you can support its development:"
            </p>
            <a
                href="https://roihacks.gumroad.com/l/dselxe"
                target="_blank"
                rel="noopener noreferrer"
                class="support-link"
            >
                "Support Our Work"
            </a>
        </div>
    }
}
