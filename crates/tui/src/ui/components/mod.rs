//! UI components: nav bar, user menu, mobile menu, auth modals, notifications, page body.

pub mod auth_modal;
pub mod component;
pub mod mobile_menu;
pub mod nav_bar;
pub mod notifications;
pub mod page;
pub mod user_menu;

pub use auth_modal::AuthModalComponent;
pub use component::*;
pub use mobile_menu::MobileMenuComponent;
pub use nav_bar::NavBarComponent;
pub use notifications::NotificationsComponent;
pub use page::PageComponent;
pub use user_menu::UserMenuComponent;
