use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let style = theme::current().status;
        let w = area.width as usize;

        let left = format!(" {} ", app.today.format("%a %b %-d"));

        // A pending message wins over the key hints
        let right = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else {
            match app.input_mode {
                InputMode::DateForm => " Enter:Save Esc:Cancel ".to_string(),
                InputMode::Normal if w >= 70 => {
                    " jk:Move Space:Toggle e:Date t:Today ?:Help q:Quit ".to_string()
                }
                InputMode::Normal if w >= 40 => " Space:Toggle e:Date q:Quit ".to_string(),
                InputMode::Normal => " ?:Help ".to_string(),
            }
        };

        let padding = " ".repeat(w.saturating_sub(left.chars().count() + right.chars().count()));
        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right, style),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
