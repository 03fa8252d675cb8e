use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::tui::component::Component;

/// Bottom bar: "Total do pedido" with the live formatted total, the order
/// quantity stepper, and a one-line key hint.
pub struct TotalBar {
    /// Formatted total, `None` until the food record is loaded.
    pub total: Option<String>,
    pub quantity: u32,
    /// True when the selection sits on the quantity stepper.
    pub selected: bool,
    /// True while the order POST is in flight.
    pub submitting: bool,
}

impl TotalBar {
    pub fn new(total: Option<String>, quantity: u32, selected: bool, submitting: bool) -> Self {
        Self {
            total,
            quantity,
            selected,
            submitting,
        }
    }

    /// Fixed rendered height: two content lines plus borders.
    pub const HEIGHT: u16 = 4;
}

impl Component for TotalBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Total do pedido");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [total_line, hint_line] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
        let [total_area, stepper_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]).areas(total_line);

        let total_text = match &self.total {
            Some(total) => Line::styled(
                total.clone(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Line::styled("—", Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(total_text, total_area);

        let stepper_style = if self.selected {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let stepper = Line::styled(format!("  - {} +", self.quantity), stepper_style);
        frame.render_widget(stepper, stepper_area);

        let hint = if self.submitting {
            "Enviando pedido..."
        } else {
            "↑/↓ seleciona · +/- ajusta · f favorito · Enter confirma pedido · q sai"
        };
        frame.render_widget(
            Line::styled(hint, Style::default().fg(Color::DarkGray)),
            hint_line,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_text(total_bar: &mut TotalBar) -> String {
        let backend = TestBackend::new(80, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                total_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_total_bar_shows_total_and_quantity() {
        let mut bar = TotalBar::new(Some("R$ 45,80".to_string()), 2, false, false);
        let text = render_to_text(&mut bar);
        assert!(text.contains("Total do pedido"));
        assert!(text.contains("R$ 45,80"));
        assert!(text.contains("- 2 +"));
        assert!(text.contains("Enter confirma pedido"));
    }

    #[test]
    fn test_total_bar_placeholder_before_load() {
        let mut bar = TotalBar::new(None, 1, false, false);
        let text = render_to_text(&mut bar);
        assert!(text.contains('—'));
        assert!(!text.contains("R$"));
    }

    #[test]
    fn test_total_bar_submitting_hint() {
        let mut bar = TotalBar::new(Some("R$ 19,90".to_string()), 1, false, true);
        let text = render_to_text(&mut bar);
        assert!(text.contains("Enviando pedido..."));
    }
}
