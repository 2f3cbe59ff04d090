use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};
use strum::AsRefStr;

/// Abstract theme colors consumed by the home screen widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThemeToken {
    Foreground,
    Background,
    Accent,
    Secondary,
    OnSecondary,
    Muted,
    Surface,
    Selected,
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<ThemeToken, Style>);

impl Styles {
    /// Style for `token`, or the terminal default when the theme leaves it out.
    pub fn token(&self, token: ThemeToken) -> Style {
        self.get(&token).copied().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<ThemeToken, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(token, style)| (token, parse_style(&style)))
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses "bold red on black" style strings.
pub fn parse_style(line: &str) -> Style {
    let (foreground, background) =
        line.split_at(line.to_lowercase().find("on ").unwrap_or(line.len()));
    let foreground = process_color_string(foreground);
    let background = process_color_string(&background.replacen("on ", "", 1));

    let mut style = Style::default();
    if let Some(fg) = parse_color(&foreground.0) {
        style = style.fg(fg);
    }
    if let Some(bg) = parse_color(&background.0) {
        style = style.bg(bg);
    }
    style = style.add_modifier(foreground.1 | background.1);
    style
}

fn process_color_string(color_str: &str) -> (String, Modifier) {
    let color = color_str
        .replace("grey", "gray")
        .replace("bright ", "")
        .replace("bold ", "")
        .replace("underline ", "")
        .replace("inverse ", "");

    let mut modifiers = Modifier::empty();
    if color_str.contains("underline") {
        modifiers |= Modifier::UNDERLINED;
    }
    if color_str.contains("bold") {
        modifiers |= Modifier::BOLD;
    }
    if color_str.contains("inverse") {
        modifiers |= Modifier::REVERSED;
    }

    (color, modifiers)
}

fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    match s {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" => Some(Color::Gray),
        "dark gray" => Some(Color::DarkGray),
        "light red" => Some(Color::LightRed),
        "light green" => Some(Color::LightGreen),
        "light yellow" => Some(Color::LightYellow),
        "light blue" => Some(Color::LightBlue),
        "light magenta" => Some(Color::LightMagenta),
        "light cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => parse_indexed_color(s),
    }
}

fn parse_indexed_color(s: &str) -> Option<Color> {
    if let Some(rgb) = s.strip_prefix("rgb") {
        // rgbRGB with each digit in 0..=5, the xterm 6x6x6 color cube
        let digits = rgb
            .chars()
            .map(|c| c.to_digit(10).and_then(|d| u8::try_from(d).ok()))
            .collect::<Option<Vec<u8>>>()?;
        match digits.as_slice() {
            [r, g, b] if *r < 6 && *g < 6 && *b < 6 => {
                Some(Color::Indexed(16 + r * 36 + g * 6 + b))
            }
            _ => None,
        }
    } else if let Some(level) = s.strip_prefix("gray") {
        // gray0..gray23 map onto the grayscale ramp
        let level = level.parse::<u8>().ok()?;
        (level < 24).then_some(Color::Indexed(232 + level))
    } else if let Some(index) = s.strip_prefix("color") {
        index.parse::<u8>().ok().map(Color::Indexed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("red", Style::default().fg(Color::Red))]
    #[case("bold red", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))]
    #[case("red on black", Style::default().fg(Color::Red).bg(Color::Black))]
    #[case("dark gray", Style::default().fg(Color::DarkGray))]
    #[case("dark grey", Style::default().fg(Color::DarkGray))]
    #[case("rgb520", Style::default().fg(Color::Indexed(16 + 5 * 36 + 2 * 6)))]
    #[case("gray10", Style::default().fg(Color::Indexed(242)))]
    #[case("color99", Style::default().fg(Color::Indexed(99)))]
    #[case("underline white", Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED))]
    fn test_parse_style(#[case] raw: &str, #[case] expected: Style) {
        assert_eq!(parse_style(raw), expected);
    }

    #[test]
    fn test_parse_style_unknown_color_is_plain() {
        assert_eq!(parse_style("chartreuse"), Style::default());
        assert_eq!(parse_style("rgb999"), Style::default());
    }

    #[test]
    fn test_deserialize_styles() -> Result<(), json5::Error> {
        let styles: Styles =
            json5::from_str(r#"{ "accent": "bold yellow", "muted": "dark gray" }"#)?;

        assert_eq!(
            styles.token(ThemeToken::Accent),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        );
        assert_eq!(styles.token(ThemeToken::Muted), Style::default().fg(Color::DarkGray));
        assert_eq!(styles.token(ThemeToken::Selected), Style::default());
        Ok(())
    }

    #[test]
    fn test_theme_token_names() {
        assert_eq!(ThemeToken::OnSecondary.as_ref(), "on_secondary");
    }
}
