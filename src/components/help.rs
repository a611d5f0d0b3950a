use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

const BINDINGS: [(&str, &str); 7] = [
    ("j/k \u{2191}/\u{2193}", "Move between reminders"),
    ("Space", "Turn reminder on/off"),
    ("e/Enter", "Pick a date (custom reminders)"),
    ("t", "Refresh today"),
    ("?", "Toggle this help"),
    ("q/Esc", "Quit / close popup"),
    ("Ctrl-c", "Quit"),
];

pub struct Help;

impl Help {
    pub fn render(frame: &mut Frame, area: Rect) {
        let t = theme::current();

        let popup_w = area.width.clamp(30, 48).min(area.width);
        let popup_h = (BINDINGS.len() as u16 + 4).min(area.height);
        let x = area.x + area.width.saturating_sub(popup_w) / 2;
        let y = area.y + area.height.saturating_sub(popup_h) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(t.title)
            .borders(Borders::ALL)
            .border_style(t.accent);
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_style = t.accent.add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from(Span::styled(
            "Reminders",
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))];
        lines.extend(BINDINGS.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:<12}", key), key_style),
                Span::raw(*desc),
            ])
        }));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
