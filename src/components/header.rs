use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

pub const TAGLINE: &str = "Because love deserves a reminder.";

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect) {
        let t = theme::current();
        let lines = vec![
            Line::from(Span::styled("\u{2665} Romindr \u{2665}", t.title)),
            Line::from(Span::styled(TAGLINE, t.tagline)),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
