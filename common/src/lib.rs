//! Font AI Common Library
//!
//! Web(WASM)ホストと共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod upload;
pub mod formatter;
pub mod prompts;
pub mod sample;

pub use types::{DisplayBlock, UploadedImage};
pub use error::{Error, Result};
pub use upload::{
    encode_data_url, extract_base64_from_data_url, extract_mime_type_from_data_url,
    validate_upload, ACCEPTED_IMAGE_TYPES, MAX_UPLOAD_BYTES,
};
pub use formatter::format_analysis;
pub use prompts::build_font_prompt;
pub use sample::{DEFAULT_ANALYSIS, DEFAULT_IMAGE_PATH};
