use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::models::AnswerOption;

use super::theme;

/// How one answer card should look this frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardState {
    pub dragging: bool,
    pub revealed_correct: bool,
    pub focused: bool,
}

pub fn render(frame: &mut Frame, area: Rect, option: &AnswerOption, state: CardState) {
    let background = if state.revealed_correct {
        theme::GREEN_200
    } else {
        theme::ORANGE_100
    };

    let mut text_style = Style::default().fg(theme::INK).bold();
    // Lifted cards read as picked up: heavier frame, faded face.
    let (border_type, border_color) = if state.dragging {
        text_style = text_style.add_modifier(Modifier::DIM);
        (BorderType::Thick, theme::ORANGE_500)
    } else if state.focused {
        (BorderType::Double, theme::ORANGE_500)
    } else {
        (BorderType::Rounded, Color::DarkGray)
    };

    let block = Block::bordered()
        .border_type(border_type)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(background));

    let widget = Paragraph::new(Span::styled(option.text.clone(), text_style))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(widget, area);
}
