use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::dnd::DndBackend;

use super::answer_card::{self, CardState};
use super::drop_zone;
use super::layout::Regions;
use super::theme;

pub fn render(
    frame: &mut Frame,
    app: &App,
    dnd: &dyn DndBackend,
    speech_available: bool,
) -> Regions {
    let regions = Regions::compute(frame.area(), app.options().len());

    render_progress(frame, regions.progress);
    render_pronounce_button(frame, regions.pronounce, speech_available);
    render_question_text(frame, regions.question, &app.question().text);
    drop_zone::render(frame, regions.drop_zone, app, dnd.is_over());
    render_options(frame, &regions, app, dnd);
    render_navigation(frame, &regions, app);
    render_controls(frame, regions.controls, dnd);

    regions
}

fn render_progress(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("Question 1 of 1").fg(Color::Gray);
    frame.render_widget(widget, area);
}

fn render_pronounce_button(frame: &mut Frame, area: Rect, enabled: bool) {
    let color = if enabled { Color::White } else { Color::DarkGray };
    let widget = Paragraph::new(format!("[{} Say]", theme::ICON_VOLUME))
        .alignment(Alignment::Right)
        .fg(color);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, regions: &Regions, app: &App, dnd: &dyn DndBackend) {
    if app.options().is_empty() {
        let widget = Paragraph::new("No options available")
            .alignment(Alignment::Center)
            .fg(Color::Gray);
        frame.render_widget(widget, regions.options_area);
        return;
    }

    for (index, (option, area)) in app.options().iter().zip(&regions.options).enumerate() {
        let state = CardState {
            dragging: dnd.is_dragging(&option.id),
            revealed_correct: app.is_revealed_correct(option),
            focused: index == app.focused_option(),
        };
        answer_card::render(frame, *area, option, state);
    }
}

fn render_navigation(frame: &mut Frame, regions: &Regions, app: &App) {
    let style_for = |enabled: bool| {
        if enabled {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let previous = Paragraph::new(format!("[{} Previous]", theme::ICON_ARROW_LEFT))
        .style(style_for(app.previous_enabled()));
    frame.render_widget(previous, regions.previous);

    let next = Paragraph::new(format!("[Next {}]", theme::ICON_ARROW_RIGHT))
        .alignment(Alignment::Right)
        .style(style_for(app.next_enabled()));
    frame.render_widget(next, regions.next);
}

fn render_controls(frame: &mut Frame, area: Rect, dnd: &dyn DndBackend) {
    let hint = format!(
        "drag a card ({})  ·  j/k enter drop  ·  s speak  ·  r reset  ·  q quit",
        dnd.kind().label()
    );
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
