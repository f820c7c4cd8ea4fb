//! Theme styling module for the navigation shell.
//!
//! The bar has exactly two looks, selected by [`NavTheme`]: a transparent
//! variant over the landing hero and an opaque white variant everywhere else.
//! Prefer these helpers over hard-coding colors so both variants stay in sync.

use once_cell::sync::Lazy;
use vassa_types::NavTheme;

pub mod roles;
pub mod theme_helpers;
pub mod vassa;

pub use roles::Theme;
pub use vassa::{HeroTheme, SurfaceTheme};

static HERO: Lazy<HeroTheme> = Lazy::new(HeroTheme::new);
static SURFACE: Lazy<SurfaceTheme> = Lazy::new(SurfaceTheme::new);

/// Palette for the bar in the given theme.
pub fn for_nav(theme: NavTheme) -> &'static dyn Theme {
    match theme {
        NavTheme::Transparent => &*HERO,
        NavTheme::Opaque => &*SURFACE,
    }
}

/// Palette for floating panels (user menu, modals, toasts), which are always solid.
pub fn panel() -> &'static dyn Theme {
    &*SURFACE
}
