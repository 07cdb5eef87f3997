//! Boolean three-channel light model.
//!
//! Light is reduced to three on/off channels. Objects and cellophane filters
//! remove channels; nothing ever adds one. Only four results have names:
//! white, red, blue and black. Every other channel combination (for example
//! green alone) is shown as black.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MirrorlabError;

/// Presence of the red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Channels {
    /// All channels present.
    pub const WHITE: Self = Self::new(true, true, true);
    /// No channels present.
    pub const DARK: Self = Self::new(false, false, false);

    /// Creates a channel set.
    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }

    /// Channel-wise AND.
    pub fn mask(self, other: Self) -> Self {
        Self::new(
            self.red && other.red,
            self.green && other.green,
            self.blue && other.blue,
        )
    }

    /// Returns whether any channel is present.
    pub fn is_lit(self) -> bool {
        self.red || self.green || self.blue
    }

    /// Maps the channel set onto the four named colors.
    pub fn to_color(self) -> Color {
        match (self.red, self.green, self.blue) {
            (true, true, true) => Color::White,
            (true, false, false) => Color::Red,
            (false, false, true) => Color::Blue,
            _ => Color::Black,
        }
    }
}

/// A surface or light color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Red,
    Blue,
    Black,
}

impl Color {
    /// All colors, in picker order.
    pub const ALL: [Self; 4] = [Self::White, Self::Red, Self::Blue, Self::Black];

    /// The channels this color consists of (and, as a surface, reflects).
    pub fn channels(self) -> Channels {
        match self {
            Self::White => Channels::WHITE,
            Self::Red => Channels::new(true, false, false),
            Self::Blue => Channels::new(false, false, true),
            Self::Black => Channels::DARK,
        }
    }

    /// Light leaving a surface of this color when lit by `incoming`.
    pub fn reflect(self, incoming: Channels) -> Channels {
        incoming.mask(self.channels())
    }

    fn key(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Color {
    type Err = MirrorlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| MirrorlabError::UnknownColor(s.to_string()))
    }
}

/// A cellophane sheet placed between the light, the object and the eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    None,
    Red,
    Blue,
}

impl Filter {
    /// All filter states, in picker order.
    pub const ALL: [Self; 3] = [Self::None, Self::Red, Self::Blue];

    /// The channels the filter lets through.
    pub fn passes(self) -> Channels {
        match self {
            Self::None => Channels::WHITE,
            Self::Red => Color::Red.channels(),
            Self::Blue => Color::Blue.channels(),
        }
    }

    /// Light after passing through the filter once.
    pub fn apply(self, light: Channels) -> Channels {
        light.mask(self.passes())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Red => "red",
            Self::Blue => "blue",
        })
    }
}

impl FromStr for Filter {
    type Err = MirrorlabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| MirrorlabError::UnknownColor(s.to_string()))
    }
}

/// Every stage of light travelling sun -> filter -> object -> filter -> eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightPath {
    /// Sunlight arriving at the filter.
    pub incident: Channels,
    /// Light that reaches the object.
    pub filtered: Channels,
    /// Light leaving the object.
    pub reflected: Channels,
    /// Light reaching the eye after the second pass through the filter.
    pub perceived: Channels,
}

impl LightPath {
    /// Follows white light to a `base` colored object under `filter`.
    pub fn through(base: Color, filter: Filter) -> Self {
        let incident = Channels::WHITE;
        let filtered = filter.apply(incident);
        let reflected = base.reflect(filtered);
        let perceived = filter.apply(reflected);
        Self {
            incident,
            filtered,
            reflected,
            perceived,
        }
    }

    /// The named color the eye sees.
    pub fn perceived_color(&self) -> Color {
        self.perceived.to_color()
    }
}

/// The color an object of color `base` appears under `filter`.
pub fn perceived_color(base: Color, filter: Filter) -> Color {
    LightPath::through(base, filter).perceived_color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_cases() {
        assert_eq!(perceived_color(Color::White, Filter::None), Color::White);
        assert_eq!(perceived_color(Color::White, Filter::Red), Color::Red);
        assert_eq!(perceived_color(Color::Red, Filter::Blue), Color::Black);
    }

    #[test]
    fn test_full_table() {
        use Color::{Black, Blue, Red, White};
        let expected = [
            // base, none, red, blue
            (White, [White, Red, Blue]),
            (Red, [Red, Red, Black]),
            (Blue, [Blue, Black, Blue]),
            (Black, [Black, Black, Black]),
        ];
        for (base, row) in expected {
            for (filter, want) in Filter::ALL.into_iter().zip(row) {
                assert_eq!(perceived_color(base, filter), want, "{base} under {filter}");
            }
        }
    }

    #[test]
    fn test_black_absorbs_everything() {
        for filter in Filter::ALL {
            assert_eq!(perceived_color(Color::Black, filter), Color::Black);
        }
    }

    #[test]
    fn test_unnamed_channels_collapse_to_black() {
        assert_eq!(Channels::new(false, true, false).to_color(), Color::Black);
        assert_eq!(Channels::new(true, true, false).to_color(), Color::Black);
        assert_eq!(Channels::new(false, true, true).to_color(), Color::Black);
    }

    #[test]
    fn test_light_path_stages() {
        let path = LightPath::through(Color::White, Filter::Blue);
        assert_eq!(path.incident, Channels::WHITE);
        assert_eq!(path.filtered.to_color(), Color::Blue);
        assert_eq!(path.reflected.to_color(), Color::Blue);
        assert_eq!(path.perceived_color(), Color::Blue);

        let dark = LightPath::through(Color::Red, Filter::Blue);
        assert!(dark.filtered.is_lit());
        assert!(!dark.reflected.is_lit());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Red".parse::<Color>().unwrap(), Color::Red);
        assert_eq!("none".parse::<Filter>().unwrap(), Filter::None);
        assert!("green".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Color::Blue).unwrap(), "\"blue\"");
        assert_eq!(serde_json::from_str::<Filter>("\"red\"").unwrap(), Filter::Red);
    }
}
