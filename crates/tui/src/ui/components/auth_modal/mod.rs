//! Login and register overlays.
//!
//! The forms themselves belong to the account flow; the shell frames them,
//! keeps them mutually exclusive and wires the cross-links between them.

mod auth_modal_component;
mod state;

pub use auth_modal_component::AuthModalComponent;
pub use state::{AuthModalAction, AuthModalState};
