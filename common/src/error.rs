//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Displayはそのまま画面に表示できる文言にする
#[derive(Error, Debug)]
pub enum Error {
    /// 画像以外のファイルが選択された（値はMIMEタイプ）
    #[error("Please upload a valid image file")]
    InvalidType(String),

    /// 上限サイズ超過（値は実際のバイト数）
    #[error("Image size should be less than 20MB")]
    TooLarge(u64),

    /// ファイル読み込み失敗
    #[error("Failed to read the image file. Please try again.")]
    Read(String),

    /// AI解析失敗（メッセージはAPI層で組み立て済み）
    #[error("{0}")]
    AnalysisFailed(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_type() {
        let error = Error::InvalidType("application/pdf".to_string());
        assert_eq!(format!("{}", error), "Please upload a valid image file");
    }

    #[test]
    fn test_error_display_too_large() {
        let error = Error::TooLarge(25 * 1024 * 1024);
        assert_eq!(format!("{}", error), "Image size should be less than 20MB");
    }

    #[test]
    fn test_error_display_read() {
        let error = Error::Read("reader aborted".to_string());
        assert_eq!(
            format!("{}", error),
            "Failed to read the image file. Please try again."
        );
    }

    #[test]
    fn test_error_display_analysis_failed() {
        let error = Error::AnalysisFailed("API error: 429".to_string());
        assert_eq!(format!("{}", error), "API error: 429");
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidType("text/plain".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidType"));
        assert!(debug.contains("text/plain"));
    }
}
