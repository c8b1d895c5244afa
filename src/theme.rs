use std::{fmt, str::FromStr};

use thiserror::Error;

pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class set on `<html>`, read by tailwind's `dark:` variants.
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// What the visitor picked. `System` follows `prefers-color-scheme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn resolve(self, prefers_dark: bool) -> Theme {
        match self {
            Self::System if prefers_dark => Theme::Dark,
            Self::System | Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }

    /// Flips what is currently shown and pins it.
    pub fn toggled(self, prefers_dark: bool) -> Self {
        match self.resolve(prefers_dark).toggled() {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ThemeError(String);

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError(other.to_string())),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_follows_media_query() {
        assert_eq!(ThemePreference::System.resolve(true), Theme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), Theme::Light);
        assert_eq!(ThemePreference::Light.resolve(true), Theme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), Theme::Dark);
    }

    #[test]
    fn test_toggle_pins_opposite() {
        assert_eq!(ThemePreference::System.toggled(true), ThemePreference::Light);
        assert_eq!(ThemePreference::System.toggled(false), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(true), ThemePreference::Light);
        assert_eq!(
            ThemePreference::Light.toggled(false).toggled(false),
            ThemePreference::Light
        );
    }

    #[test]
    fn test_storage_strings() {
        for pref in [
            ThemePreference::System,
            ThemePreference::Light,
            ThemePreference::Dark,
        ] {
            assert_eq!(pref.to_string().parse::<ThemePreference>(), Ok(pref));
        }
        assert!("blue".parse::<ThemePreference>().is_err());
    }
}
