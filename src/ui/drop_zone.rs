use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::{App, DropZoneMode};

use super::theme;

const PLACEHOLDER: &str = "Drop your answer here";
const CORRECT_MESSAGE: &str = "Correct!";
const INCORRECT_MESSAGE: &str = "Incorrect. Try again!";

pub fn render(frame: &mut Frame, area: Rect, app: &App, hovering: bool) {
    let mode = app.drop_zone_mode(hovering);
    let state = app.interaction();
    let background = theme::verdict_background(state.is_correct);

    let block = match mode {
        DropZoneMode::Hovering => Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(theme::ORANGE_500)),
        _ => Block::bordered()
            .border_set(theme::DASHED)
            .border_style(Style::default().fg(theme::ORANGE_200)),
    }
    .style(Style::default().bg(background).fg(theme::INK));

    let lines = match (mode, state.dropped_answer_text.as_deref()) {
        (DropZoneMode::Empty, _) | (_, None) => vec![Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme::ORANGE_500).bold(),
        ))],
        (_, Some(text)) => vec![
            Line::from(Span::styled(text.to_string(), Style::default().bold())),
            verdict_line(state.is_correct),
        ],
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(inner);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);
}

fn verdict_line(is_correct: Option<bool>) -> Line<'static> {
    match is_correct {
        Some(true) => Line::from(format!("{} {}", theme::ICON_CHECK, CORRECT_MESSAGE)),
        Some(false) => Line::from(format!("{} {}", theme::ICON_CROSS, INCORRECT_MESSAGE)),
        None => Line::default(),
    }
}
