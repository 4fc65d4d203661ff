//! アップロードエリアコンポーネント
//!
//! ファイル選択 → 検証 → Data URL読み込みまでを担当し、
//! 結果（UploadedImageまたはエラー）をコールバックで親に渡す。
//! 解析の起動は親（App）の責務。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, File, FileReader, HtmlInputElement};

use font_ai_common::{validate_upload, Error, UploadedImage, ACCEPTED_IMAGE_TYPES};

#[component]
pub fn UploadArea<F>(api_key: ReadSignal<String>, on_upload: F) -> impl IntoView
where
    F: Fn(Result<UploadedImage, Error>) + 'static + Clone,
{
    let is_enabled = move || !api_key.get().is_empty();

    let on_change = {
        let on_upload = on_upload.clone();
        move |ev: web_sys::Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // 同じファイルを続けて選び直せるよう毎回リセット
            input.set_value("");

            if let Err(e) = validate_upload(&file.type_(), file.size() as u64) {
                on_upload(Err(e));
                return;
            }
            read_file(file, on_upload.clone());
        }
    };

    view! {
        <div class="upload-section">
            <label
                for="image-upload"
                class=move || {
                    if is_enabled() { "upload-button" } else { "upload-button disabled" }
                }
            >
                "Upload Image with Text"
                <input
                    id="image-upload"
                    type="file"
                    class="hidden"
                    accept=ACCEPTED_IMAGE_TYPES
                    disabled=move || !is_enabled()
                    on:change=on_change
                />
            </label>
            <Show
                when=is_enabled
                fallback=|| view! {
                    <p class="text-muted">
                        "Enter your Gemini API key above to start uploading"
                    </p>
                }
            >
                <p class="text-muted">"PNG, JPG, JPEG or WEBP (MAX. 20MB)"</p>
            </Show>
        </div>
    }
}

/// 検証済みファイルをData URLとして読み込む
fn read_file<F>(file: File, on_done: F)
where
    F: Fn(Result<UploadedImage, Error>) + 'static + Clone,
{
    let size = file.size() as u64;
    let on_error = on_done.clone();
    read_blob_as_data_url(
        &file,
        move |data_url| on_done(Ok(UploadedImage::from_data_url(data_url, size))),
        move || on_error(Err(Error::Read("FileReader error".to_string()))),
    );
}

/// BlobをData URLとして読み込む（FileReaderコールバック）
///
/// Appの初期画像読み込みとアップロード経路の両方から使う
pub(crate) fn read_blob_as_data_url<S, F>(blob: &Blob, on_load: S, on_error: F)
where
    S: Fn(String) + 'static,
    F: Fn() + 'static + Clone,
{
    let Ok(reader) = FileReader::new() else {
        on_error();
        return;
    };

    let reader_clone = reader.clone();
    let on_error_load = on_error.clone();
    let onload = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        match reader_clone.result() {
            Ok(result) => {
                if let Some(data_url) = result.as_string() {
                    on_load(data_url);
                } else {
                    on_error_load();
                }
            }
            Err(_) => on_error_load(),
        }
    }) as Box<dyn FnMut(_)>);
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    let on_error_event = on_error.clone();
    let onerror = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        on_error_event();
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    if reader.read_as_data_url(blob).is_err() {
        on_error();
    }
}
