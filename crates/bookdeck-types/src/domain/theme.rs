use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day/night rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

/// RGB triple as the render layer consumes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const NEAR_BLACK: Rgb = Rgb { r: 10, g: 10, b: 20 };
pub const NEAR_WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

/// Resolved color roles: `dark` is the foreground role, `light` the
/// background role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub dark: Rgb,
    pub light: Rgb,
}

impl Theme {
    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Day => ThemePalette {
                dark: NEAR_BLACK,
                light: NEAR_WHITE,
            },
            Theme::Night => ThemePalette {
                dark: NEAR_WHITE,
                light: NEAR_BLACK,
            },
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Day => Theme::Night,
            Theme::Night => Theme::Day,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Day => write!(f, "day"),
            Theme::Night => write!(f, "night"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(format!("unknown theme '{}' (expected day or night)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_exact_inverses() {
        let day = Theme::Day.palette();
        let night = Theme::Night.palette();
        assert_eq!(day.dark, night.light);
        assert_eq!(day.light, night.dark);
        assert_eq!(night.dark, NEAR_WHITE);
        assert_eq!(night.light, NEAR_BLACK);
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Theme::Day.toggled(), Theme::Night);
        assert_eq!(Theme::Night.toggled().toggled(), Theme::Night);
    }

    #[test]
    fn parses_from_config_strings() {
        assert_eq!("day".parse::<Theme>().unwrap(), Theme::Day);
        assert_eq!("night".parse::<Theme>().unwrap(), Theme::Night);
        assert!("dusk".parse::<Theme>().is_err());
    }
}
