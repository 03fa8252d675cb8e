use ratatui::layout::{Alignment, Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use tui_scrollview::{ScrollView, ScrollbarVisibility};

use crate::core::state::Screen;
use crate::tui::component::Component;
use crate::tui::components::{ExtrasList, FoodCard, TitleBar, TotalBar};
use crate::tui::{Selection, TuiState};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw_ui(frame: &mut Frame, screen: &Screen, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(TotalBar::HEIGHT)]);
    let [title_area, main_area, total_area] = layout.areas(frame.area());

    // Title bar
    let food_name = screen
        .food
        .as_ref()
        .map(|food| food.name.clone())
        .unwrap_or_default();
    let mut title_bar = TitleBar::new(
        food_name,
        screen.is_favorite,
        screen.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    // Main area - error view, loading view, or the dish content
    if let Some(error_msg) = &screen.error {
        draw_error_view(frame, main_area, error_msg);
    } else if screen.loading() {
        draw_loading_view(frame, main_area, spinner_frame);
    } else {
        draw_content_area(frame, main_area, screen, tui);
    }

    // Total bar
    let quantity_selected = screen.food.is_some()
        && matches!(tui.selection(screen.extras.len()), Selection::Quantity);
    let mut total_bar = TotalBar::new(
        screen.formatted_total(),
        screen.quantity,
        quantity_selected,
        screen.submitting,
    );
    total_bar.render(frame, total_area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let lines = vec![
        Line::raw("Erro ao carregar o prato."),
        Line::raw(""),
        Line::styled(error_msg, Style::default().fg(Color::DarkGray)),
    ];
    let error_paragraph = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title("ERRO")
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let [_, middle, _] = Layout::vertical([Min(0), Length(1), Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(format!("{spinner} Carregando...")).alignment(Alignment::Center),
        middle,
    );
}

fn draw_content_area(frame: &mut Frame, area: Rect, screen: &Screen, tui: &mut TuiState) {
    let Some(food) = &screen.food else {
        return;
    };

    // Leave a column for the scrollbar
    let content_width = area.width.saturating_sub(1);

    let card = FoodCard::new(food);
    let card_height = card.height(content_width);

    let selected_extra = match tui.selection(screen.extras.len()) {
        Selection::Extra(index) => Some(index),
        Selection::Quantity => None,
    };
    let list = ExtrasList::new(&screen.extras, selected_extra);
    let list_height = list.height();

    let total_height = card_height + list_height;
    let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

    scroll_view.render_widget(card, Rect::new(0, 0, content_width, card_height));
    scroll_view.render_widget(list, Rect::new(0, card_height, content_width, list_height));

    frame.render_stateful_widget(scroll_view, area, &mut tui.scroll_state);
}
