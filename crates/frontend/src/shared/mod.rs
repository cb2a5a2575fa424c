pub mod api_utils;
pub mod cell_format;
pub mod components;
pub mod config;
pub mod data_access;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_view;
pub mod modal_frame;
