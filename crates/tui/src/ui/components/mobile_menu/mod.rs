//! Collapsed navigation panel for terminals narrower than the mobile breakpoint.

mod mobile_menu_component;
mod state;

pub use mobile_menu_component::MobileMenuComponent;
pub use state::{MobileEntry, MobileMenuState, entries};
