//! Color configuration for the TUI.

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

/// Colors used by the headlines screen.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub border: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub headline: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub image_url: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub image_placeholder: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub loading: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub status_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            headline: Color::White,
            image_url: Color::Blue,
            image_placeholder: Color::DarkGray,
            selection_bg: Color::Yellow,
            selection_fg: Color::Black,
            loading: Color::Yellow,
            status_fg: Color::White,
            status_bg: Color::DarkGray,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a color string into a ratatui Color.
///
/// Accepts the usual named terminal colors (case-insensitive) and hex
/// colors in "#RRGGBB" or "#RGB" form.
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex).ok_or_else(|| format!("Invalid hex color: {}", s));
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        "reset" => Ok(Color::Reset),
        _ => Err(format!("Unknown color: {}", s)),
    }
}

fn parse_hex_color(hex: &str) -> Option<Color> {
    let value = u32::from_str_radix(hex, 16).ok()?;

    match hex.len() {
        6 => Some(Color::Rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )),
        // #RGB expands each nibble, so "#F00" means "#FF0000".
        3 => Some(Color::Rgb(
            (((value >> 8) & 0xF) * 17) as u8,
            (((value >> 4) & 0xF) * 17) as u8,
            ((value & 0xF) * 17) as u8,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color_string("Yellow").unwrap(), Color::Yellow);
        assert_eq!(parse_color_string("yellow").unwrap(), Color::Yellow);
        assert_eq!(parse_color_string("YELLOW").unwrap(), Color::Yellow);
        assert_eq!(parse_color_string("DarkGray").unwrap(), Color::DarkGray);
        assert_eq!(parse_color_string("darkgrey").unwrap(), Color::DarkGray);
    }

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(
            parse_color_string("#FF0000").unwrap(),
            Color::Rgb(255, 0, 0)
        );
        assert_eq!(
            parse_color_string("#00ff00").unwrap(),
            Color::Rgb(0, 255, 0)
        );
        assert_eq!(parse_color_string("#0F0").unwrap(), Color::Rgb(0, 255, 0));
        assert_eq!(
            parse_color_string("#FFF").unwrap(),
            Color::Rgb(255, 255, 255)
        );
    }

    #[test]
    fn test_parse_invalid_colors() {
        assert!(parse_color_string("invalid").is_err());
        assert!(parse_color_string("#GGGGGG").is_err());
        assert!(parse_color_string("#12345").is_err());
    }
}
