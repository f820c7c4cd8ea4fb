//! Authenticated user's dropdown: profile details, "Your Properties" and logout.

mod logout;
mod state;
mod user_menu_component;

pub use logout::{LOGOUT_FAILURE_MESSAGE, LOGOUT_SUCCESS_MESSAGE, LogoutFlow};
pub use state::{UserMenuItem, UserMenuState};
pub use user_menu_component::UserMenuComponent;
pub(crate) use user_menu_component::panel_contains;
