pub mod api_error;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod metadata;
pub mod navigation;
pub mod number_format;
pub mod resolver;
pub mod wire;
