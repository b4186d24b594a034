// src/theme.rs

use egui::{Context, Visuals};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`, expected light or dark")]
pub struct UnknownTheme(pub String);

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn visuals(self) -> Visuals {
        match self {
            ThemeMode::Light => Visuals::light(),
            ThemeMode::Dark => Visuals::dark(),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(UnknownTheme(s.to_owned())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }
}

/// Session-wide theme. Lives as long as the app, never written to storage.
#[derive(Debug, Default)]
pub struct ThemeStore {
    mode: ThemeMode,
    applied: Option<ThemeMode>,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            applied: None,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        log::debug!("theme switched to {}", self.mode);
        self.mode
    }

    /// Pushes the visuals into egui when the mode changed since the last frame.
    pub fn apply(&mut self, ctx: &Context) {
        if self.applied != Some(self.mode) {
            ctx.set_visuals(self.mode.visuals());
            self.applied = Some(self.mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        assert_eq!(ThemeStore::default().mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_twice_restores_mode() {
        for start in [ThemeMode::Light, ThemeMode::Dark] {
            let mut store = ThemeStore::new(start);
            assert_eq!(store.toggle(), start.toggled());
            assert_eq!(store.toggle(), start);
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!(" DARK ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("blue".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn apply_sets_visuals_once_per_change() {
        let ctx = Context::default();
        let mut store = ThemeStore::new(ThemeMode::Light);
        store.apply(&ctx);
        assert!(!ctx.style().visuals.dark_mode);

        store.toggle();
        store.apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);
    }
}
