pub mod core;
pub mod history;
pub mod tools;
pub mod render;
pub mod app;

rust_i18n::i18n!("locales", fallback = "en");
