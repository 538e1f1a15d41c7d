use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. They hold no state between frames: every
/// redraw builds fresh components from the current `RenderPlan`.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component may cache layout work (such as
/// wrapped line counts) during the render pass.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
