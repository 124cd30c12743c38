//! Color scheme definitions and ANSI escape sequence generation.
//!
//! Colors are hex strings (`#a6e3a1`). An empty color means "no styling", which
//! is how [`Theme::plain`] renders escape-free output for logs and tests.
//!
//! # Example
//!
//! ```rust
//! use staffdesk::ui::Theme;
//!
//! let theme = Theme::default();
//! println!("{}", theme.paint(&theme.colors.success, "Insert successful"));
//! assert_eq!(Theme::plain().paint("", "x"), "x");
//! ```

use serde::{Deserialize, Serialize};

/// Named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color of every styled console element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    pub text_dim: String,
    pub selection_fg: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub border: String,
}

impl ThemeColors {
    fn mocha() -> Self {
        Self {
            header_fg: "#cba6f7".into(),
            text_dim: "#6c7086".into(),
            selection_fg: "#89b4fa".into(),
            success: "#a6e3a1".into(),
            warning: "#f9e2af".into(),
            error: "#f38ba8".into(),
            border: "#45475a".into(),
        }
    }
}

impl Theme {
    /// Built-in theme by name: `catppuccin-mocha`, `catppuccin-latte`, or
    /// `plain`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let colors = match name {
            "catppuccin-mocha" => ThemeColors::mocha(),
            "catppuccin-latte" => ThemeColors {
                header_fg: "#8839ef".into(),
                text_dim: "#9ca0b0".into(),
                selection_fg: "#1e66f5".into(),
                success: "#40a02b".into(),
                warning: "#df8e1d".into(),
                error: "#d20f39".into(),
                border: "#bcc0cc".into(),
            },
            "plain" => ThemeColors::default(),
            _ => return None,
        };
        Some(Self {
            name: name.to_string(),
            colors,
        })
    }

    /// Theme without any escape sequences.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            name: "plain".into(),
            colors: ThemeColors::default(),
        }
    }

    /// Wraps `text` in the foreground `color`, or returns it as-is when the
    /// color is empty.
    #[must_use]
    pub fn paint(&self, color: &str, text: &str) -> String {
        if color.is_empty() {
            text.to_string()
        } else {
            format!("{}{text}{}", Self::fg(color), Self::reset())
        }
    }

    /// Converts a hex color to RGB, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            name: "catppuccin-mocha".into(),
            colors: ThemeColors::mocha(),
        }
    }
}
