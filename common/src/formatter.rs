//! 解析レスポンスのフォーマッタ
//!
//! AIが返す緩いmarkdown風テキストを行単位でDisplayBlockに変換する。
//! レスポンスの構造は保証されないため、認識できない行は常に
//! Paragraphへフォールバックし、失敗しない。

use crate::types::DisplayBlock;

/// 解析テキストをDisplayBlock列に変換
///
/// 純粋関数。同じ入力に対して何度呼んでも同じ出力を返す。
///
/// 行ごとの判定（順序維持）:
/// 1. markdown記号（* _ # `）を除去してトリム
/// 2. 空になった行はスキップ
/// 3. "3. Secondary Fonts" のような番号付き行 → SectionHeader
/// 4. "- Weight: Regular" → LabeledField（最初のコロンで分割）
/// 5. "- Serif" → BulletItem
/// 6. それ以外 → Paragraph
///
/// # Arguments
/// * `text` - AIレスポンスの生テキスト
pub fn format_analysis(text: &str) -> Vec<DisplayBlock> {
    text.lines().filter_map(parse_line).collect()
}

/// 1行をDisplayBlockに変換（空行はNone）
fn parse_line(line: &str) -> Option<DisplayBlock> {
    let clean = clean_line(line);
    if clean.is_empty() {
        return None;
    }

    if let Some(rest) = strip_section_number(&clean) {
        return Some(DisplayBlock::SectionHeader(rest.to_string()));
    }

    if let Some(rest) = clean.strip_prefix('-') {
        // 最初のコロンだけで分割し、値側のコロンは保持する
        if let Some((label, value)) = rest.split_once(':') {
            return Some(DisplayBlock::LabeledField {
                label: label.trim().to_string(),
                value: value.trim().to_string(),
            });
        }
        return Some(DisplayBlock::BulletItem(rest.trim().to_string()));
    }

    Some(DisplayBlock::Paragraph(clean))
}

/// markdown記号を除去してトリム
fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| !matches!(c, '*' | '_' | '#' | '`'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// 行頭の "<数字>." を除去（見出し判定）
///
/// 番号付きでない行はNone
fn strip_section_number(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None; // 数字で始まらない
    }
    rest.strip_prefix('.').map(|s| s.trim_start())
}
