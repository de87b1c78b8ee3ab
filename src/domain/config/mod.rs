//! Configuration value objects

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_PASTE_DELAY_MS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SETTLE_DELAY_MS,
};
