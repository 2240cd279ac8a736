//! Theme definitions for the OmniSell UI.

use iced::Color;

/// The OmniSell color palette.
#[derive(Debug, Clone)]
pub struct OmniTheme {
    pub name: &'static str,
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub danger: Color,
    pub border: Color,
}

impl OmniTheme {
    /// Parse a hex color string like "#2563eb" to iced Color.
    pub fn from_hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() >= 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(128) as f32 / 255.0;
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(128) as f32 / 255.0;
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(128) as f32 / 255.0;
            Color::from_rgb(r, g, b)
        } else {
            Color::from_rgb(0.5, 0.5, 0.5)
        }
    }

    /// Create a color with alpha transparency.
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color::from_rgba(color.r, color.g, color.b, alpha)
    }

    /// The default light storefront theme.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Self::from_hex("#f9fafb"),
            surface: Self::from_hex("#ffffff"),
            text: Self::from_hex("#111827"),
            subtext: Self::from_hex("#6b7280"),
            accent: Self::from_hex("#2563eb"),
            highlight: Self::from_hex("#f97316"),
            success: Self::from_hex("#16a34a"),
            danger: Self::from_hex("#dc2626"),
            border: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
        }
    }
}

impl Default for OmniTheme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_parses_channels() {
        let c = OmniTheme::from_hex("#ff0080");
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!(c.g.abs() < f32::EPSILON);
        assert!((c.b - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_hex_falls_back_on_garbage() {
        let c = OmniTheme::from_hex("#xyz");
        assert!((c.r - 0.5).abs() < f32::EPSILON);
    }
}
