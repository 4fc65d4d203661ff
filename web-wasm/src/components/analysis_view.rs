//! 解析結果表示コンポーネント
//!
//! 解析テキストをDisplayBlock列に整形し、種類ごとのスタイルで描画する。
//! テキストが変わるたびに全ブロックを再生成する（整形は純粋関数）。

use leptos::prelude::*;

use font_ai_common::{format_analysis, DisplayBlock};

#[component]
pub fn AnalysisView(analysis: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="analysis-blocks">
            {move || {
                format_analysis(&analysis.get())
                    .into_iter()
                    .map(render_block)
                    .collect_view()
            }}
        </div>
    }
}

fn render_block(block: DisplayBlock) -> AnyView {
    match block {
        DisplayBlock::SectionHeader(text) => {
            view! { <h3 class="section-header">{text}</h3> }.into_any()
        }
        DisplayBlock::LabeledField { label, value } => view! {
            <div class="labeled-field">
                <span class="field-label">{label}":"</span>
                <span class="field-value">{value}</span>
            </div>
        }
        .into_any(),
        DisplayBlock::BulletItem(text) => view! {
            <div class="bullet-item">
                <span class="bullet">"•"</span>
                <span>{text}</span>
            </div>
        }
        .into_any(),
        DisplayBlock::Paragraph(text) => view! { <p class="paragraph">{text}</p> }.into_any(),
    }
}
