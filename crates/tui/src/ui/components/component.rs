//! Component system for the navigation shell.
//!
//! Components are self-contained UI elements: they read and mutate their slice
//! of [`App`] state in response to input, render themselves into a provided
//! `Rect`, and report side effects back as [`Effect`]s instead of performing
//! I/O directly.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};
use vassa_types::{Effect, Msg};

use crate::app::App;

/// A UI component with its own event handling and rendering.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input arrives through `handle_key_events()` and
///    `handle_mouse_events()`; host events through `handle_message()`.
/// 2. **Rendering**: `render()` draws the component into the provided area.
/// 3. **Hints**: `get_hint_spans()` contributes key hints for the hints bar
///    while the component is the input target.
pub(crate) trait Component {
    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events while this component is the input target.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events. Components are expected to hit-test against
    /// their last rendered area and ignore events outside it.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into `rect`.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown while this component receives input.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Areas the component would like to render into, in a component-defined order.
    fn get_preferred_layout(&self, _app: &App, area: Rect) -> Vec<Rect> {
        vec![area]
    }
}
