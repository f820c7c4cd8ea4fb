use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

// Brand
pub const MAROON: Color = Color::Rgb(0x85, 0x15, 0x24); // #851524
pub const YELLOW: Color = Color::Rgb(0xFA, 0xCC, 0x15); // #facc15 - yellow-400
pub const YELLOW_SOFT: Color = Color::Rgb(0xFD, 0xE0, 0x47); // #fde047 - yellow-300

// Neutrals
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const INK: Color = Color::Rgb(0x11, 0x11, 0x11);
pub const GRAY_100: Color = Color::Rgb(0xF3, 0xF4, 0xF6);
pub const GRAY_200: Color = Color::Rgb(0xE5, 0xE7, 0xEB);
pub const GRAY_500: Color = Color::Rgb(0x6B, 0x72, 0x80);
pub const GRAY_700: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const HERO_BG: Color = Color::Rgb(0x16, 0x12, 0x14); // photo backdrop stand-in
pub const HERO_SHADE: Color = Color::Rgb(0x0B, 0x09, 0x0A);

pub const STATUS_INFO: Color = Color::Rgb(0x38, 0xBD, 0xF8);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xC5, 0x5E);
pub const STATUS_ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);

/// Bar over the landing hero: no surface of its own, light text.
#[derive(Debug, Clone)]
pub struct HeroTheme {
    roles: ThemeRoles,
}

impl HeroTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: HERO_BG,
                surface: HERO_BG,
                border: GRAY_700,

                text: WHITE,
                text_secondary: GRAY_200,
                text_muted: GRAY_500,

                brand: MAROON,
                highlight: YELLOW,

                notice_info: STATUS_INFO,
                notice_success: STATUS_OK,
                notice_error: STATUS_ERROR,

                selection_bg: YELLOW,
                selection_fg: INK,
                focus: YELLOW,

                backdrop: HERO_SHADE,
            },
        }
    }
}

impl Default for HeroTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for HeroTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// Solid white bar with dark text, used everywhere except the top of the landing page.
#[derive(Debug, Clone)]
pub struct SurfaceTheme {
    roles: ThemeRoles,
}

impl SurfaceTheme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: GRAY_100,
                surface: WHITE,
                border: GRAY_200,

                text: INK,
                text_secondary: GRAY_700,
                text_muted: GRAY_500,

                brand: MAROON,
                highlight: YELLOW,

                notice_info: STATUS_INFO,
                notice_success: STATUS_OK,
                notice_error: STATUS_ERROR,

                selection_bg: YELLOW_SOFT,
                selection_fg: INK,
                focus: MAROON,

                backdrop: GRAY_500,
            },
        }
    }
}

impl Default for SurfaceTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for SurfaceTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
