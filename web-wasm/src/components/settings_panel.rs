//! 設定パネルコンポーネント
//!
//! Gemini APIキーの入力と保存。キーはlocalStorageに持ち、
//! ページを開き直しても入力し直さなくて済むようにする。

use gloo::storage::{LocalStorage, Storage};
use leptos::prelude::*;

/// localStorageのAPIキー保存先
pub(crate) const API_KEY_STORAGE: &str = "font-ai-api-key";

#[component]
pub fn SettingsPanel(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
) -> impl IntoView {
    let (status, set_status) = signal(String::new());

    let on_save = move |_| {
        match LocalStorage::set(API_KEY_STORAGE, api_key.get_untracked()) {
            Ok(()) => set_status.set("API key saved".to_string()),
            Err(_) => set_status.set("Failed to save API key".to_string()),
        }
    };

    let on_clear = move |_| {
        LocalStorage::delete(API_KEY_STORAGE);
        set_api_key.set(String::new());
        set_status.set("API key cleared".to_string());
    };

    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="api-key">"Gemini API Key"</label>
                <input
                    type="password"
                    id="api-key"
                    placeholder="Enter your API key..."
                    prop:value=move || api_key.get()
                    on:input=move |ev| {
                        set_api_key.set(event_target_value(&ev));
                    }
                />
                <a
                    href="https://aistudio.google.com/app/apikey"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "Get an API key →"
                </a>
                <div class="api-actions">
                    <button class="btn btn-secondary btn-small" on:click=on_save>
                        "Save"
                    </button>
                    <button class="btn btn-tertiary btn-small" on:click=on_clear>
                        "Clear"
                    </button>
                </div>
                <div class="api-key-status">{move || status.get()}</div>
            </div>
        </div>
    }
}
