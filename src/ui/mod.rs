mod answer_card;
mod drop_zone;
mod layout;
mod quiz;
mod theme;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::dnd::DndBackend;

pub use layout::{ClickAction, Regions};

/// Draw the quiz view and return the geometry used, for hit testing.
pub fn render(
    frame: &mut Frame,
    app: &App,
    dnd: &dyn DndBackend,
    speech_available: bool,
) -> Regions {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    quiz::render(frame, app, dnd, speech_available)
}
