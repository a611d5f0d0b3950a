use chrono::{Duration, Months, NaiveDate};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use uuid::Uuid;

use crate::reminder::ReminderRecord;
use crate::theme;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MAX_LEN: usize = 10;

/// Text being typed into the date popup for one custom-date record.
#[derive(Debug, Clone)]
pub struct DateFormState {
    pub record_id: Uuid,
    pub title: String,
    pub input: String,
}

impl DateFormState {
    pub fn new(record: &ReminderRecord) -> Self {
        Self {
            record_id: record.id(),
            title: record.title.clone(),
            input: record.user_date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.input, DATE_FORMAT).ok()
    }

    pub fn push(&mut self, c: char) {
        if (c.is_ascii_digit() || c == '-') && self.input.len() < MAX_LEN {
            self.input.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }

    /// No-op while the input does not parse.
    pub fn shift_days(&mut self, days: i64) {
        if let Some(date) = self
            .parsed_date()
            .and_then(|d| d.checked_add_signed(Duration::days(days)))
        {
            self.set(date);
        }
    }

    pub fn shift_months(&mut self, months: i32) {
        let shifted = self.parsed_date().and_then(|d| {
            let step = Months::new(months.unsigned_abs());
            if months >= 0 {
                d.checked_add_months(step)
            } else {
                d.checked_sub_months(step)
            }
        });
        if let Some(date) = shifted {
            self.set(date);
        }
    }

    fn set(&mut self, date: NaiveDate) {
        self.input = date.format(DATE_FORMAT).to_string();
    }
}

pub struct DateForm;

impl DateForm {
    pub fn render(frame: &mut Frame, area: Rect, form: &DateFormState) {
        let t = theme::current();

        let popup_w = area.width.clamp(30, 46);
        let popup_h = 7.min(area.height);
        let x = area.x + area.width.saturating_sub(popup_w) / 2;
        let y = area.y + area.height.saturating_sub(popup_h) / 2;
        let popup_area = Rect::new(x, y, popup_w.min(area.width), popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" Select date for {} ", form.title))
            .title_style(t.title)
            .borders(Borders::ALL)
            .border_style(t.accent);

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let valid = form.parsed_date().is_some();
        let input_style = if valid {
            t.selected
        } else {
            t.selected.add_modifier(Modifier::CROSSED_OUT)
        };

        let input = Line::from(vec![
            Span::styled(" Date: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!("{}_", form.input), input_style),
        ]);
        frame.render_widget(Paragraph::new(input), rows[0]);

        let preview = match form.parsed_date() {
            Some(date) => format!(" {}", date.format("%A, %B %-d, %Y")),
            None => " YYYY-MM-DD".to_string(),
        };
        frame.render_widget(Paragraph::new(preview).style(t.dim), rows[1]);

        let hints = " \u{2191}\u{2193}:Day [/]:Month Enter:Save Esc:Cancel";
        frame.render_widget(Paragraph::new(hints).style(t.dim), rows[3]);
    }
}
