use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::api::Food;
use crate::tui::component::Component;

/// A stateless component that renders the loaded dish: name as the block
/// title, wrapped description, unit price underneath.
///
/// `FoodCard` is a transient component, created fresh each frame from the
/// loaded record. [`height`](Self::height) predicts the rendered height so
/// the parent can size the scroll canvas without rendering first.
#[derive(Clone, Copy)]
pub struct FoodCard<'a> {
    pub food: &'a Food,
}

impl<'a> FoodCard<'a> {
    pub fn new(food: &'a Food) -> Self {
        Self { food }
    }

    fn paragraph(&self) -> Paragraph<'a> {
        let lines = vec![
            Line::styled(
                self.food.description.as_str(),
                Style::default().fg(Color::Gray),
            ),
            Line::raw(""),
            Line::styled(
                self.food.formatted_price.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(self.food.name.as_str())
                    .title_style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .wrap(Wrap { trim: true })
    }

    /// Rendered height at the given width, borders included.
    pub fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width) as u16
    }
}

impl<'a> Widget for FoodCard<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        self.paragraph().render(area, buf);
    }
}

impl<'a> Component for FoodCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_food;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_food_card_renders_name_description_and_price() {
        let backend = TestBackend::new(60, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut food = sample_food();
        food.formatted_price = "R$ 19,90".to_string();

        terminal
            .draw(|f| {
                let mut card = FoodCard::new(&food);
                Component::render(&mut card, f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Ao molho"));
        assert!(text.contains("Macarrão"));
        assert!(text.contains("R$ 19,90"));
    }

    #[test]
    fn test_food_card_height_includes_borders() {
        let mut food = sample_food();
        food.description = "curta".to_string();
        let card = FoodCard::new(&food);
        // 3 content lines (description, blank, price) + 2 border lines
        assert_eq!(card.height(60), 5);
    }

    #[test]
    fn test_food_card_height_grows_when_description_wraps() {
        let mut food = sample_food();
        food.description = "palavra ".repeat(40);
        let card = FoodCard::new(&food);
        assert!(card.height(30) > 5);
    }
}
