//! 案内文コンポーネント

use leptos::prelude::*;

#[component]
pub fn InfoBlock() -> impl IntoView {
    view! {
        <div class="info-block">
            <h2>"Recognize Any Typography Instantly"</h2>
            <p>
                "Upload a clear photo of printed or digital text and the AI will identify \
                 the typeface, suggest similar alternatives, and explain the font's \
                 characteristics, history, and licensing."
            </p>
            <h3>"How It Works"</h3>
            <p>
                "The AI analyzes the letterforms in your image, identifies the typeface, \
                 and reports its classification, era, and distinctive features - perfect \
                 for designers, marketers, and typography enthusiasts."
            </p>
            <h3>"Key Features"</h3>
            <ul>
                <li>"Detailed typeface classification and characteristics"</li>
                <li>"Historical context and designer information"</li>
                <li>"Similar font recommendations"</li>
                <li>"Licensing information and download sources"</li>
                <li>"Usage recommendations and pairing suggestions"</li>
            </ul>
            <h3>"Perfect For:"</h3>
            <ul>
                <li>"Graphic designers seeking to match fonts"</li>
                <li>"Publishers maintaining typographic consistency"</li>
                <li>"Web developers replicating design mockups"</li>
                <li>"Anyone curious about the fonts they encounter daily"</li>
            </ul>
        </div>
    }
}
