//! Named colors, borders and glyphs requested by the views.

use ratatui::style::Color;
use ratatui::symbols::border;

pub const ORANGE_100: Color = Color::Rgb(255, 237, 213);
pub const ORANGE_200: Color = Color::Rgb(254, 215, 170);
pub const ORANGE_500: Color = Color::Rgb(249, 115, 22);
pub const GREEN_200: Color = Color::Rgb(187, 247, 208);
pub const RED_200: Color = Color::Rgb(254, 202, 202);
pub const GRAY_200: Color = Color::Rgb(229, 231, 235);
pub const INK: Color = Color::Black;

pub const DASHED: border::Set = border::Set {
    horizontal_top: "╌",
    horizontal_bottom: "╌",
    vertical_left: "╎",
    vertical_right: "╎",
    ..border::ROUNDED
};

pub const ICON_VOLUME: &str = "🔊";
pub const ICON_ARROW_LEFT: &str = "←";
pub const ICON_ARROW_RIGHT: &str = "→";
pub const ICON_CHECK: &str = "✅";
pub const ICON_CROSS: &str = "❌";

/// Background for a drop zone that has received `last` as its latest verdict.
pub fn verdict_background(last: Option<bool>) -> Color {
    match last {
        Some(true) => GREEN_200,
        Some(false) => RED_200,
        None => GRAY_200,
    }
}
