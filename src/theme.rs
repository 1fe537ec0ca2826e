use std::{fmt, str::FromStr};

use thiserror::Error;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Self {
        match stored {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid theme: {0:?}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemePreference {
    pub stored: Option<Theme>,
}

impl ThemePreference {
    pub fn theme(&self, prefers_dark: bool) -> Theme {
        Theme::resolve(self.stored, prefers_dark)
    }

    pub fn toggle(&mut self, prefers_dark: bool) -> Theme {
        let next = self.theme(prefers_dark).toggled();
        self.stored = Some(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use codee::{string::FromToStringCodec, Decoder, Encoder};

    use super::*;

    #[test]
    fn test_parse_theme() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_storage_codec_round_trip() {
        assert_eq!(
            <FromToStringCodec as Encoder<Theme>>::encode(&Theme::Dark),
            Ok("dark".to_string())
        );
        assert_eq!(
            <FromToStringCodec as Decoder<Theme>>::decode("light"),
            Ok(Theme::Light)
        );
        // unrecognized stored text is a decode error, leaving the stored value unset
        assert_eq!(
            <FromToStringCodec as Decoder<Theme>>::decode("solarized"),
            Err(ParseThemeError("solarized".to_string()))
        );
    }

    #[test]
    fn test_initial_resolution() {
        let dark = ThemePreference {
            stored: Some(Theme::Dark),
        };
        assert_eq!(dark.theme(false), Theme::Dark);

        let light = ThemePreference {
            stored: Some(Theme::Light),
        };
        assert_eq!(light.theme(true), Theme::Light);

        let unset = ThemePreference::default();
        assert_eq!(unset.theme(true), Theme::Dark);
        assert_eq!(unset.theme(false), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores_and_persists() {
        for prefers_dark in [false, true] {
            let mut pref = ThemePreference::default();
            let original = pref.theme(prefers_dark);

            let flipped = pref.toggle(prefers_dark);
            assert_eq!(flipped, original.toggled());
            assert_eq!(pref.stored, Some(flipped));

            let back = pref.toggle(prefers_dark);
            assert_eq!(back, original);
            assert_eq!(pref.stored, Some(pref.theme(prefers_dark)));
        }
    }

    #[test]
    fn test_stored_choice_ignores_system_change() {
        let mut pref = ThemePreference::default();
        pref.toggle(false);
        assert_eq!(pref.theme(false), Theme::Dark);
        assert_eq!(pref.theme(true), Theme::Dark);
    }
}
