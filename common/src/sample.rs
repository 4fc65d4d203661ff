//! 初期表示用の同梱コンテンツ
//!
//! ページ表示直後はAPIを呼ばず、同梱画像とこの定型解析文を表示する。

/// 同梱のサンプル画像（サイトルートから配信）
pub const DEFAULT_IMAGE_PATH: &str = "/default-font.jpg";

/// サンプル画像に対応する定型解析文（Garamond）
pub const DEFAULT_ANALYSIS: &str = r#"1. Primary Font Identification:
- Font Name: Garamond (Classic style)
- Classification: Serif
- Style: Old-style serif
- Weight: Regular
- Era/Period: Renaissance (16th century origins)
- Sample Characters: "fetched the day before", "Tales at Bedtime", "Tom the Scout-Cub"

2. Font Details & Characteristics:
- Designer: Claude Garamond (original) with many variants over centuries
- Distinctive Features: Elegant proportions, moderate contrast between thick and thin strokes
- x-height: Moderate
- Serifs: Bracketed serifs with gentle curves
- Character Terminals: Rounded, soft terminals
- Stress Angle: Diagonal/oblique stress
- Character Recognition: Classic double-story 'a', graceful 'e' with angled crossbar

3. Secondary Fonts Detected:
- Chapter Titles: Possibly Garamond Bold or Semibold
- Page Numbers: Same typeface, smaller point size
- Book Title: Garamond small caps or variant

4. Typographic Analysis:
- Leading (Line Spacing): Generous, approximately 1.4-1.5× the font size
- Paragraph Formatting: Justified alignment
- Margins: Generous margins characteristic of classic book design
- Character Spacing: Natural spacing with minimal kerning adjustments
- Word Spacing: Well-balanced for readability
- Page Layout: Traditional book layout with page numbers at top outside corners

5. Similar Fonts & Alternatives:
- Adobe Garamond Pro
- Sabon (designed by Jan Tschichold)
- EB Garamond (open source)
- Granjon
- Minion Pro
- Bembo
- Palatino

6. Font Licensing & Sources:
- Commercial Options: Adobe Fonts (Adobe Garamond), Monotype (Garamond variants)
- Free Alternatives: EB Garamond (Google Fonts), Cormorant Garamond
- Usage Restrictions: Most Garamond variants allow both personal and commercial use

7. Historical Context:
- Garamond typefaces are named after Claude Garamond (c. 1510-1561)
- Originally designed for Latin texts and evolved for various European languages
- Widely used in book printing for centuries
- Considered one of the most readable serif fonts for extended text
- Known for its elegance and refined appearance

8. Usage Recommendations:
- Ideal For: Books, academic texts, literary publications
- Print Applications: Magazine articles, journals, formal invitations
- Digital Use: Any text requiring elegance and readability
- Pairing Suggestions: Sans-serif fonts like Gill Sans or Futura for headers/subtitles
- Point Size Recommendation: 10-12pt for body text, 14-18pt for subheadings"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::format_analysis;
    use crate::types::DisplayBlock;

    #[test]
    fn test_default_analysis_not_empty() {
        assert!(!DEFAULT_ANALYSIS.is_empty());
    }

    #[test]
    fn test_default_analysis_has_eight_sections() {
        let headers = format_analysis(DEFAULT_ANALYSIS)
            .into_iter()
            .filter(|b| matches!(b, DisplayBlock::SectionHeader(_)))
            .count();
        assert_eq!(headers, 8);
    }

    #[test]
    fn test_default_analysis_first_block_is_primary_identification() {
        let blocks = format_analysis(DEFAULT_ANALYSIS);
        assert_eq!(
            blocks.first(),
            Some(&DisplayBlock::SectionHeader(
                "Primary Font Identification:".to_string()
            ))
        );
    }

    #[test]
    fn test_default_image_path() {
        assert!(DEFAULT_IMAGE_PATH.starts_with('/'));
        assert!(DEFAULT_IMAGE_PATH.ends_with(".jpg"));
    }
}
