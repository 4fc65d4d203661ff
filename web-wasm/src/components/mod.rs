//! UIコンポーネント

pub mod action_buttons;
pub mod analysis_view;
pub mod header;
pub mod info_block;
pub mod settings_panel;
pub mod support_block;
pub mod upload_area;
