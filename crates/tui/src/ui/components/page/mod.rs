//! Routed page body under the bar.

mod content;
mod page_component;
mod state;

pub use content::{HERO_ROWS, LineKind, PageLine, page_lines};
pub use page_component::PageComponent;
pub use state::PageState;
