use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe color enum instead of strings.
///
/// `Default` is the sentinel meaning "no color override". Unknown color
/// strings from the API fall back to it rather than failing the parse —
/// a wrong accent is recoverable, a dropped page is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        match s.as_str() {
            "gray" => Color::Gray,
            "brown" => Color::Brown,
            "orange" => Color::Orange,
            "yellow" => Color::Yellow,
            "green" => Color::Green,
            "blue" => Color::Blue,
            "purple" => Color::Purple,
            "pink" => Color::Pink,
            "red" => Color::Red,
            "gray_background" => Color::GrayBackground,
            "brown_background" => Color::BrownBackground,
            "orange_background" => Color::OrangeBackground,
            "yellow_background" => Color::YellowBackground,
            "green_background" => Color::GreenBackground,
            "blue_background" => Color::BlueBackground,
            "purple_background" => Color::PurpleBackground,
            "pink_background" => Color::PinkBackground,
            "red_background" => Color::RedBackground,
            _ => Color::Default,
        }
    }
}

impl Color {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Pink => "pink",
            Color::Red => "red",
            Color::GrayBackground => "gray_background",
            Color::BrownBackground => "brown_background",
            Color::OrangeBackground => "orange_background",
            Color::YellowBackground => "yellow_background",
            Color::GreenBackground => "green_background",
            Color::BlueBackground => "blue_background",
            Color::PurpleBackground => "purple_background",
            Color::PinkBackground => "pink_background",
            Color::RedBackground => "red_background",
        }
    }

    /// CSS class applied when rendering, or `None` for the sentinel.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Color::Default => None,
            Color::Gray => Some("color-gray"),
            Color::Brown => Some("color-brown"),
            Color::Orange => Some("color-orange"),
            Color::Yellow => Some("color-yellow"),
            Color::Green => Some("color-green"),
            Color::Blue => Some("color-blue"),
            Color::Purple => Some("color-purple"),
            Color::Pink => Some("color-pink"),
            Color::Red => Some("color-red"),
            Color::GrayBackground => Some("bg-gray"),
            Color::BrownBackground => Some("bg-brown"),
            Color::OrangeBackground => Some("bg-orange"),
            Color::YellowBackground => Some("bg-yellow"),
            Color::GreenBackground => Some("bg-green"),
            Color::BlueBackground => Some("bg-blue"),
            Color::PurpleBackground => Some("bg-purple"),
            Color::PinkBackground => Some("bg-pink"),
            Color::RedBackground => Some("bg-red"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_parsing() {
        assert_eq!(Color::from("red".to_string()), Color::Red);
        assert_eq!(
            Color::from("gray_background".to_string()),
            Color::GrayBackground
        );
        // Unknown colors fall back to the sentinel instead of failing.
        assert_eq!(Color::from("ultraviolet".to_string()), Color::Default);
    }

    #[test]
    fn test_sentinel_has_no_css_class() {
        assert_eq!(Color::Default.css_class(), None);
        assert_eq!(Color::Red.css_class(), Some("color-red"));
    }
}
