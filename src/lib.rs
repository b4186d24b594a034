pub mod app;
pub mod audio;
pub mod auth;
pub mod browse;
pub mod config;
pub mod data;
pub mod exam;
pub mod model;
pub mod quiz;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::KoreanPrepApp;
pub use config::AppConfig;
