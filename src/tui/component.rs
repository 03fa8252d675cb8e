use ratatui::layout::Rect;
use ratatui::Frame;

/// A section of the screen that knows how to draw itself.
///
/// Every widget on the order screen implements this: it is built fresh each
/// frame from props (its struct fields, filled from `Screen` and `TuiState`)
/// and paints itself into the `Rect` the layout hands it.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component can keep presentation scratch
/// state (cached wraps, scroll offsets) across the pass, mirroring Ratatui's
/// `StatefulWidget` shape.
pub trait Component {
    /// Draw the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
