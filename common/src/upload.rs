//! 画像アップロードの検証とData URLユーティリティ

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{Error, Result};

/// アップロード上限サイズ（20MiB）
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// file pickerに渡す受付MIMEタイプ
pub const ACCEPTED_IMAGE_TYPES: &str = "image/jpeg,image/png,image/jpg,image/webp";

/// アップロードファイルの検証
///
/// MIMEタイプが `image/` で始まらない場合とサイズ上限超過を弾く。
/// 検証だけを行い、読み込みや解析は呼び出し側の責務。
///
/// # Arguments
/// * `mime_type` - ブラウザが報告するMIMEタイプ
/// * `size` - ファイルのバイト数
pub fn validate_upload(mime_type: &str, size: u64) -> Result<()> {
    if !mime_type.starts_with("image/") {
        return Err(Error::InvalidType(mime_type.to_string()));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(Error::TooLarge(size));
    }
    Ok(())
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// バイト列からData URLを生成
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}
