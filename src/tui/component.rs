use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::host::InputEvent;

/// A reusable UI component.
///
/// Components are the building blocks pages draw with:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// The `render` method takes `&mut self` to allow components to update
/// internal caches or presentation state during rendering. Pages hold their
/// state behind `&self`, so they usually build a component per frame.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that interprets frame input.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `InputEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &InputEvent) -> Option<Self::Event>;
}
