// Color palette for the terminal interface
use ratatui::style::Color;

/// Trash accent
pub const ACCENT_PRIMARY: Color = Color::Rgb(255, 82, 82);
/// Keep accent
pub const ACCENT_SECONDARY: Color = Color::Rgb(76, 175, 80);
/// Titles, counters, selected tab
pub const ACCENT_HIGHLIGHT: Color = Color::Rgb(0, 122, 255);

pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);
pub const TEXT_SECONDARY: Color = Color::Rgb(140, 140, 140);
pub const BORDER_COLOR: Color = Color::Rgb(90, 90, 90);
pub const BG_DARK: Color = Color::Rgb(24, 24, 24);

/// Blends `color` toward the background by `opacity` (0.0 = invisible).
///
/// Non-RGB colors are returned unchanged when visible at all.
pub fn fade(color: Color, opacity: f64) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, BG_DARK) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => {
            let mix = |fg: u8, bg: u8| -> u8 {
                (bg as f64 + (fg as f64 - bg as f64) * opacity).round() as u8
            };
            Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
        }
        (other, _) => other,
    }
}
