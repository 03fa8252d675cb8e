use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::Frame;

use crate::api::Extra;
use crate::core::money;
use crate::tui::component::Component;

/// A stateless component that renders the "Adicionais" block: one row per
/// extra with its unit price and a `- n +` stepper. The selected row gets a
/// background highlight; `+`/`-` act on it.
#[derive(Clone, Copy)]
pub struct ExtrasList<'a> {
    pub extras: &'a [Extra],
    /// Index of the highlighted row, if the selection is on an extra.
    pub selected: Option<usize>,
}

impl<'a> ExtrasList<'a> {
    pub fn new(extras: &'a [Extra], selected: Option<usize>) -> Self {
        Self { extras, selected }
    }

    fn rows(&self) -> Vec<Line<'a>> {
        if self.extras.is_empty() {
            return vec![Line::styled(
                "Sem adicionais",
                Style::default().fg(Color::DarkGray),
            )];
        }

        self.extras
            .iter()
            .enumerate()
            .map(|(index, extra)| {
                let text = format!(
                    " {:<24} {:>10}   - {} +",
                    extra.name,
                    money::format_price(extra.value),
                    extra.quantity
                );
                let style = if self.selected == Some(index) {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::styled(text, style)
            })
            .collect()
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.rows()).block(Block::bordered().title("Adicionais"))
    }

    /// Rendered height: one row per extra (or the empty note) plus borders.
    pub fn height(&self) -> u16 {
        self.extras.len().max(1) as u16 + 2
    }
}

impl<'a> Widget for ExtrasList<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        self.paragraph().render(area, buf);
    }
}

impl<'a> Component for ExtrasList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
