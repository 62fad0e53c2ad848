//! Color palette.

use acceptme_core::Role;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16); // Terminal background
pub const CARD_BG: Color = Color::Rgb(18, 21, 28); // Panel/card backgrounds
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43); // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);
pub const BORDER_ACTIVE: Color = Color::Rgb(99, 102, 241);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(99, 102, 241); // Indigo
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Role accents ---
pub const ROLE_TOP: Color = Color::Rgb(244, 63, 94); // Rose
pub const ROLE_JUNGLE: Color = Color::Rgb(16, 185, 129); // Emerald
pub const ROLE_MID: Color = Color::Rgb(139, 92, 246); // Violet
pub const ROLE_ADC: Color = Color::Rgb(245, 158, 11); // Amber
pub const ROLE_SUPPORT: Color = Color::Rgb(6, 182, 212); // Cyan

/// Accent color for a lane
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Top => ROLE_TOP,
        Role::Jungle => ROLE_JUNGLE,
        Role::Mid => ROLE_MID,
        Role::Adc => ROLE_ADC,
        Role::Support => ROLE_SUPPORT,
    }
}
