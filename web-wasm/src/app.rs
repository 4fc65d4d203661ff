//! メインアプリケーションコンポーネント
//!
//! 状態遷移: Idle -> Loading -> Ready/Errored -> Loading -> ...
//! 画像・解析文・エラーはすべてここのシグナルが持ち、
//! コンポーネントには読み取り側だけを渡す。

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Response};

use crate::api::gemini;
use crate::components::{
    action_buttons::ActionButtons,
    analysis_view::AnalysisView,
    header::Header,
    info_block::InfoBlock,
    settings_panel::{SettingsPanel, API_KEY_STORAGE},
    support_block::SupportBlock,
    upload_area::{read_blob_as_data_url, UploadArea},
};
use font_ai_common::{
    build_font_prompt, Error, UploadedImage, DEFAULT_ANALYSIS, DEFAULT_IMAGE_PATH,
};
use gloo::storage::{LocalStorage, Storage};

/// API層がメッセージを返さなかったときの表示文言
const ANALYZE_FALLBACK: &str = "Failed to analyze image. Please try again.";

/// 解析セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Loading => "loading",
            Phase::Ready => "ready",
            Phase::Errored => "errored",
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) =
        signal(LocalStorage::get::<String>(API_KEY_STORAGE).unwrap_or_default());
    let (phase, set_phase) = signal(Phase::Idle);
    let (image, set_image) = signal(None::<UploadedImage>);
    let (analysis, set_analysis) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    // 解析世代。完了時に一致しないレスポンスは古いものとして捨てる
    let (generation, set_generation) = signal(0u64);

    // 初期表示: 同梱画像と定型解析文をAPI呼び出しなしで表示
    set_phase.set(Phase::Loading);
    spawn_local(async move {
        match fetch_default_image().await {
            Ok(blob) => {
                let size = blob.size() as u64;
                read_blob_as_data_url(
                    &blob,
                    move |data_url| {
                        set_image.set(Some(UploadedImage::from_data_url(data_url, size)));
                        set_analysis.set(DEFAULT_ANALYSIS.to_string());
                        set_phase.set(Phase::Ready);
                    },
                    move || {
                        set_error.set(Some("Failed to load default image".to_string()));
                        set_phase.set(Phase::Errored);
                    },
                );
            }
            Err(e) => {
                gloo::console::error!("Error loading default image:", e);
                set_error.set(Some("Failed to load default image".to_string()));
                set_phase.set(Phase::Errored);
            }
        }
    });

    // 解析実行。開始時に世代を進め、古い完了は適用しない
    let run_analysis = move |img: UploadedImage| {
        let token = generation.get_untracked() + 1;
        set_generation.set(token);
        set_phase.set(Phase::Loading);
        set_error.set(None);
        let key = api_key.get_untracked();
        spawn_local(async move {
            let result = gemini::analyze_image(&key, &img.data_url, &build_font_prompt()).await;
            let Some(next) =
                phase_after_completion(generation.get_untracked(), token, result.is_ok())
            else {
                return; // 古いレスポンス
            };
            match result {
                Ok(text) => set_analysis.set(text),
                Err(e) => {
                    let msg = e.as_string().unwrap_or_else(|| ANALYZE_FALLBACK.to_string());
                    gloo::console::error!("analyze failed:", msg.clone());
                    set_error.set(Some(Error::AnalysisFailed(msg).to_string()));
                }
            }
            set_phase.set(next);
        });
    };

    // アップロード成功で即解析。失敗時は直前の表示を残してエラーだけ出す
    let on_upload = move |result: Result<UploadedImage, Error>| {
        set_phase.set(phase_after_upload(&result));
        match result {
            Ok(img) => {
                set_image.set(Some(img.clone()));
                set_error.set(None);
                run_analysis(img);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let on_analyze = move |_: ()| {
        if let Some(img) = image.get_untracked() {
            run_analysis(img);
        }
    };

    // 「Upload Another」は隠しinputをクリックして同じ経路に乗せる
    let on_upload_another = move |_: ()| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("image-upload"))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.click();
        }
    };

    view! {
        <div class="container" data-phase=move || phase.get().as_str()>
            <Header />

            <SettingsPanel api_key=api_key set_api_key=set_api_key />

            <UploadArea api_key=api_key on_upload=on_upload />

            {move || {
                error
                    .get()
                    .map(|msg| view! { <div class="error-banner"><p>{msg}</p></div> })
            }}

            <Show when=move || phase.get() == Phase::Loading && image.get().is_none()>
                <p class="loading-text">"Loading..."</p>
            </Show>

            <Show when=move || image.get().is_some()>
                <div class="preview">
                    <img
                        src=move || image.get().map(|img| img.data_url).unwrap_or_default()
                        alt="Text sample preview"
                    />
                </div>
                <ActionButtons
                    phase=phase
                    api_key=api_key
                    on_analyze=on_analyze
                    on_upload_another=on_upload_another
                />
            </Show>

            <Show when=move || !analysis.get().is_empty()>
                <div class="results-panel">
                    <h2>"Font Analysis Results"</h2>
                    <AnalysisView analysis=analysis />
                </div>
            </Show>

            <SupportBlock />

            <InfoBlock />

            <SupportBlock />
        </div>
    }
}

/// アップロード結果に対する次フェーズ
///
/// 現在のフェーズには依存しない。Errored中でも新しいアップロードは
/// 必ずLoadingへ遷移させる。
fn phase_after_upload(result: &Result<UploadedImage, Error>) -> Phase {
    match result {
        Ok(_) => Phase::Loading,
        Err(_) => Phase::Errored,
    }
}

/// 解析完了に対する次フェーズ
///
/// 完了時点の世代がトークンと一致しない場合は古いレスポンスなので
/// 適用しない（None）。
fn phase_after_completion(current_generation: u64, token: u64, succeeded: bool) -> Option<Phase> {
    if current_generation != token {
        return None;
    }
    Some(if succeeded { Phase::Ready } else { Phase::Errored })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted() -> Result<UploadedImage, Error> {
        Ok(UploadedImage::from_data_url(
            "data:image/jpeg;base64,/9j/4AAQ",
            1024,
        ))
    }

    // =============================================
    // phase_after_upload テスト
    // =============================================

    #[test]
    fn test_upload_accepted_enters_loading() {
        assert_eq!(phase_after_upload(&accepted()), Phase::Loading);
    }

    #[test]
    fn test_upload_rejected_enters_errored() {
        let rejected: Result<UploadedImage, Error> = Err(Error::TooLarge(25 * 1024 * 1024));
        assert_eq!(phase_after_upload(&rejected), Phase::Errored);
    }

    // =============================================
    // phase_after_completion テスト
    // =============================================

    #[test]
    fn test_completion_success_enters_ready() {
        assert_eq!(phase_after_completion(1, 1, true), Some(Phase::Ready));
    }

    #[test]
    fn test_completion_failure_enters_errored() {
        assert_eq!(phase_after_completion(1, 1, false), Some(Phase::Errored));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        // 完了までに世代が進んでいたら適用しない
        assert_eq!(phase_after_completion(2, 1, true), None);
        assert_eq!(phase_after_completion(2, 1, false), None);
    }

    // =============================================
    // 遷移シーケンステスト
    // =============================================

    #[test]
    fn test_recovers_from_errored_after_fresh_upload() {
        // 解析失敗でErroredに入る
        let mut phase = phase_after_completion(1, 1, false).unwrap();
        assert_eq!(phase, Phase::Errored);

        // 新しいアップロードで必ずLoadingへ戻る
        phase = phase_after_upload(&accepted());
        assert_eq!(phase, Phase::Loading);

        // その解析が成功すればReady。Erroredに取り残されない
        phase = phase_after_completion(2, 2, true).unwrap();
        assert_eq!(phase, Phase::Ready);
    }

    #[test]
    fn test_superseded_analysis_applies_latest_only() {
        // 1回目（トークン1）の解析中に2回目（トークン2）が始まった場合、
        // 古い完了は無視され、最新の完了だけが状態を動かす
        assert_eq!(phase_after_completion(2, 1, true), None);
        assert_eq!(phase_after_completion(2, 2, true), Some(Phase::Ready));
    }
}

/// 同梱のサンプル画像を取得
async fn fetch_default_image() -> Result<Blob, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(DEFAULT_IMAGE_PATH)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }

    let blob = JsFuture::from(resp.blob()?).await?;
    blob.dyn_into()
        .map_err(|_| JsValue::from_str("response body is not a blob"))
}
