//! Horizontal navigation bar.
//!
//! The bar shows the logo, the primary links (wide terminals only), the
//! "Free List Property" call-to-action and the identity affordance. On narrow
//! terminals the links collapse into the mobile panel behind a toggle.
//!
//! - `state`: layout, hit testing and rat-focus flags per target
//! - `scroll_theme`: transparent/opaque theme driven by the landing page scroll
//! - `nav_bar_component`: rendering and input

mod nav_bar_component;
mod scroll_theme;
mod state;

pub use nav_bar_component::NavBarComponent;
pub use scroll_theme::{ScrollThemeState, compute_theme};
pub use state::{CTA_LABEL, CTA_LABEL_SHORT, NavBarState, NavLayoutContext, NavTarget, compute_layout, target_label};

use vassa_types::{Effect, Route};

/// Effect for following a link, honouring "open elsewhere" modifiers.
pub fn follow_link(route: Route, detached: bool) -> Effect {
    if detached { Effect::OpenDetached(route) } else { Effect::Navigate(route) }
}
