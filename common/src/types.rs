//! 共有型定義
//!
//! Web(WASM)ホストと共有される型:
//! - UploadedImage: アップロード済み画像（Data URL形式）
//! - DisplayBlock: 解析テキストの表示ブロック

use serde::{Deserialize, Serialize};

use crate::upload::extract_mime_type_from_data_url;

/// アップロード済み画像
///
/// Data URLはプレビュー表示とAPI送信の両方に使う。
/// 新しいアップロードのたびに丸ごと差し替える（永続化しない）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// "data:image/jpeg;base64,..." 形式
    pub data_url: String,
    pub mime_type: String,
    /// 元ファイルのバイト数
    pub size: u64,
}

impl UploadedImage {
    /// Data URLとファイルサイズから構築（MIMEタイプはData URLから抽出）
    pub fn from_data_url(data_url: impl Into<String>, size: u64) -> Self {
        let data_url = data_url.into();
        let mime_type = extract_mime_type_from_data_url(&data_url).to_string();
        Self {
            data_url,
            mime_type,
            size,
        }
    }
}

/// 解析テキストの表示ブロック
///
/// AnalysisResultテキストから都度生成される派生データ。
/// 生成後に書き換えない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayBlock {
    /// セクション見出し（"3. Secondary Fonts" の番号を除いた部分）
    SectionHeader(String),
    /// "- Weight: Regular" 形式のラベル付き行
    LabeledField { label: String, value: String },
    /// "- Serif" 形式の箇条書き
    BulletItem(String),
    /// その他の行はすべて段落として扱う
    Paragraph(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploaded_image_from_data_url() {
        let image = UploadedImage::from_data_url("data:image/png;base64,iVBORw0KGgo=", 1024);
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.size, 1024);
        assert!(image.data_url.starts_with("data:image/png"));
    }

    #[test]
    fn test_uploaded_image_serialize() {
        let image = UploadedImage::from_data_url("data:image/jpeg;base64,/9j/4AAQ", 2048);
        let json = serde_json::to_string(&image).expect("シリアライズ失敗");
        assert!(json.contains("\"dataUrl\""));
        assert!(json.contains("\"mimeType\":\"image/jpeg\""));
        assert!(json.contains("\"size\":2048"));
    }

    #[test]
    fn test_display_block_equality() {
        let a = DisplayBlock::LabeledField {
            label: "Weight".to_string(),
            value: "Regular".to_string(),
        };
        let b = DisplayBlock::LabeledField {
            label: "Weight".to_string(),
            value: "Regular".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(a, DisplayBlock::BulletItem("Weight".to_string()));
    }

    #[test]
    fn test_display_block_serialize() {
        let block = DisplayBlock::SectionHeader("Historical Context".to_string());
        let json = serde_json::to_string(&block).expect("シリアライズ失敗");
        assert!(json.contains("sectionHeader"));
        assert!(json.contains("Historical Context"));
    }
}
