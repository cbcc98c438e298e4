//! Screen geometry, shared by rendering and hit testing.

use ratatui::layout::{Constraint, Layout, Rect};

const CARD_MAX_WIDTH: u16 = 64;
const OPTION_HEIGHT: u16 = 3;
const PRONOUNCE_WIDTH: u16 = 8;
const PREVIOUS_WIDTH: u16 = 12;
const NEXT_WIDTH: u16 = 8;

/// Clickable controls outside drag-and-drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    Pronounce,
    Previous,
    Next,
}

/// Where each element of the quiz view sits for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    pub progress: Rect,
    pub pronounce: Rect,
    pub question: Rect,
    pub drop_zone: Rect,
    pub options_area: Rect,
    /// One rect per option, in question order.
    pub options: Vec<Rect>,
    pub previous: Rect,
    pub next: Rect,
    pub controls: Rect,
}

#[inline]
fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

impl Regions {
    pub fn compute(area: Rect, option_count: usize) -> Self {
        let width = area.width.min(CARD_MAX_WIDTH);
        let [card] = Layout::horizontal([Constraint::Length(width)])
            .flex(ratatui::layout::Flex::Center)
            .areas(area);

        let rows = u16::try_from(option_count.div_ceil(2))
            .unwrap_or(u16::MAX)
            .max(1);
        let [header, _, question, drop_zone, _, options_area, _, nav, _, controls] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Length(rows.saturating_mul(OPTION_HEIGHT)),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .margin(1)
            .areas(card);

        let [progress, pronounce] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(PRONOUNCE_WIDTH)])
                .areas(header);

        let [previous, _, next] = Layout::horizontal([
            Constraint::Length(PREVIOUS_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(NEXT_WIDTH),
        ])
        .areas(nav);

        Self {
            progress,
            pronounce,
            question,
            drop_zone,
            options_area,
            options: option_grid(options_area, option_count),
            previous,
            next,
            controls,
        }
    }

    /// Control under the point, if any.
    pub fn action_at(&self, x: u16, y: u16) -> Option<ClickAction> {
        [
            (self.pronounce, ClickAction::Pronounce),
            (self.previous, ClickAction::Previous),
            (self.next, ClickAction::Next),
        ]
        .into_iter()
        .find(|(rect, _)| contains(*rect, x, y))
        .map(|(_, action)| action)
    }
}

/// Two-column grid, filled row by row. Cards that do not fit get no rect.
fn option_grid(area: Rect, count: usize) -> Vec<Rect> {
    let rows = count
        .div_ceil(2)
        .min(usize::from(area.height / OPTION_HEIGHT));
    if rows == 0 {
        return Vec::new();
    }

    let row_areas = Layout::vertical(vec![Constraint::Length(OPTION_HEIGHT); rows]).split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            let cells = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                .spacing(2)
                .split(*row);
            [cells[0], cells[1]]
        })
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_options_form_two_rows() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 30), 4);
        assert_eq!(regions.options.len(), 4);
        assert_eq!(regions.options[0].y, regions.options[1].y);
        assert!(regions.options[2].y > regions.options[0].y);
        assert!(regions.options[1].x > regions.options[0].x);
        assert!(regions.drop_zone.y < regions.options[0].y);
    }

    #[test]
    fn test_odd_option_count() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 30), 3);
        assert_eq!(regions.options.len(), 3);
    }

    #[test]
    fn test_huge_option_count_is_clipped_to_screen() {
        let area = Rect::new(0, 0, 80, 30);
        let regions = Regions::compute(area, 1_000_000);

        assert!(!regions.options.is_empty());
        assert!(regions.options.len() < 1_000_000);
        assert!(regions.options.iter().all(|rect| rect.bottom() <= area.bottom()));
        assert!(regions.controls.bottom() <= area.bottom());
    }

    #[test]
    fn test_action_at_controls() {
        let regions = Regions::compute(Rect::new(0, 0, 80, 30), 4);
        let p = regions.pronounce;
        assert_eq!(regions.action_at(p.x, p.y), Some(ClickAction::Pronounce));
        let n = regions.next;
        assert_eq!(regions.action_at(n.x + 1, n.y), Some(ClickAction::Next));
        let d = regions.drop_zone;
        assert_eq!(regions.action_at(d.x + 1, d.y + 1), None);
    }
}
