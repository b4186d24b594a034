// src/config.rs

use crate::theme::ThemeMode;
use std::time::Duration;

pub const SPLASH_DELAY: Duration = Duration::from_millis(2600);

const SPLASH_ENV: &str = "KOREAN_PREP_SPLASH_MS";
const THEME_ENV: &str = "KOREAN_PREP_THEME";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub splash_delay: Duration,
    pub initial_theme: ThemeMode,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_delay: SPLASH_DELAY,
            initial_theme: ThemeMode::default(),
            window_title: "Korean Prep Sri Lanka".to_owned(),
        }
    }
}

impl AppConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Bad values are logged and skipped.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SPLASH_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.splash_delay = Duration::from_millis(ms),
                Err(err) => log::warn!("ignoring {SPLASH_ENV}={raw:?}: {err}"),
            }
        }

        if let Some(raw) = lookup(THEME_ENV) {
            match raw.parse::<ThemeMode>() {
                Ok(mode) => config.initial_theme = mode,
                Err(err) => log::warn!("ignoring {THEME_ENV}={raw:?}: {err}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.splash_delay, Duration::from_millis(2600));
        assert_eq!(config.initial_theme, ThemeMode::Dark);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            ("KOREAN_PREP_SPLASH_MS", "500"),
            ("KOREAN_PREP_THEME", "Light"),
        ]));
        assert_eq!(config.splash_delay, Duration::from_millis(500));
        assert_eq!(config.initial_theme, ThemeMode::Light);
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[
            ("KOREAN_PREP_SPLASH_MS", "soon"),
            ("KOREAN_PREP_THEME", "sepia"),
        ]));
        assert_eq!(config, AppConfig::default());
    }
}
