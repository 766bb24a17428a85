pub mod app_settings;
pub mod session;
pub mod store;
