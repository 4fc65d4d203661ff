//! プロンプト生成モジュール
//!
//! フォント解析用の固定プロンプトをここで組み立てる。
//! セクション構成を変えるときはFONT_PROMPT_SECTIONSだけを触ればよい。

/// フォント解析レポートの8セクション（番号順）
///
/// (見出し, AIへ指示する内訳) のペア
pub const FONT_PROMPT_SECTIONS: &[(&str, &str)] = &[
    (
        "Primary Font Identification",
        "font name, classification, style, weight, era/period, sample characters",
    ),
    (
        "Font Details & Characteristics",
        "designer, distinctive features, x-height, serifs, terminals, stress angle, character recognition",
    ),
    (
        "Secondary Fonts Detected",
        "if any other fonts are present in headings, captions, etc.",
    ),
    (
        "Typographic Analysis",
        "leading, paragraph formatting, margins, character spacing, word spacing, layout",
    ),
    (
        "Similar Fonts & Alternatives",
        "list of similar typefaces and good alternatives",
    ),
    (
        "Font Licensing & Sources",
        "where to find the font, licensing information",
    ),
    (
        "Historical Context",
        "background information about the font",
    ),
    (
        "Usage Recommendations",
        "ideal uses, print applications, digital use, pairing suggestions, size recommendations",
    ),
];

/// フォント解析プロンプト生成
///
/// 画像1枚と一緒に送る固定の指示文。確信が持てない場合も
/// 最有力候補を答えるよう最後に指示する。
pub fn build_font_prompt() -> String {
    let sections = FONT_PROMPT_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, (title, detail))| format!("{}. {} ({})", i + 1, title, detail))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze this image and identify the fonts used in it. Provide the following information:\n{sections}\n\nIf you cannot identify the exact font with certainty, provide your best educated guess and list several possible matches."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // FONT_PROMPT_SECTIONS テスト
    // =============================================

    #[test]
    fn test_sections_count() {
        assert_eq!(FONT_PROMPT_SECTIONS.len(), 8);
    }

    #[test]
    fn test_sections_contain_primary_identification() {
        assert!(FONT_PROMPT_SECTIONS
            .iter()
            .any(|(title, _)| *title == "Primary Font Identification"));
    }

    // =============================================
    // build_font_prompt テスト
    // =============================================

    #[test]
    fn test_build_font_prompt_numbers_all_sections() {
        let prompt = build_font_prompt();
        for (i, (title, _)) in FONT_PROMPT_SECTIONS.iter().enumerate() {
            assert!(
                prompt.contains(&format!("{}. {}", i + 1, title)),
                "セクションが欠落: {}",
                title
            );
        }
    }

    #[test]
    fn test_build_font_prompt_contains_instruction() {
        let prompt = build_font_prompt();
        assert!(prompt.starts_with("Analyze this image"));
        assert!(prompt.contains("best educated guess"));
    }

    #[test]
    fn test_build_font_prompt_is_stable() {
        // 固定プロンプトなので毎回同一
        assert_eq!(build_font_prompt(), build_font_prompt());
    }
}
