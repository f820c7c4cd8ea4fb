//! Toast notifications rendered in the top-right corner.

mod notifications_component;
mod state;

pub use notifications_component::NotificationsComponent;
pub use state::{NotificationsState, Toast};
