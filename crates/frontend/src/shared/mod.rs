pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod lookup;
pub mod upload;
