pub mod api_utils;
pub mod components;
pub mod crud_api;
pub mod crud_screen;
pub mod icons;
pub mod lifetime;
pub mod list_utils;
pub mod modal;
