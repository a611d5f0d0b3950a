use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::effects::Effects;
use crate::reminder::Upcoming;
use crate::theme::{self, CONFETTI_COLORS};

pub struct ReminderList;

impl ReminderList {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        entries: &[Upcoming],
        today: NaiveDate,
        selected_index: usize,
        effects: &Effects,
    ) {
        let t = theme::current();
        let w = area.width as usize;

        let enabled = entries.iter().filter(|e| e.record.is_enabled).count();
        let title = if w >= 30 {
            format!(" Reminders ({}/{} on) ", enabled, entries.len())
        } else {
            " Reminders ".to_string()
        };

        let block = Block::default()
            .title(title)
            .title_style(t.title)
            .borders(Borders::ALL)
            .border_style(t.border);

        if entries.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(Paragraph::new("No reminders").style(t.dim), inner);
            return;
        }

        let inner_w = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| card(entry, today, i == selected_index, effects, inner_w))
            .collect();

        let mut state = ListState::default().with_selected(Some(selected_index));
        frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
    }
}

fn card<'a>(
    entry: &Upcoming,
    today: NaiveDate,
    selected: bool,
    effects: &Effects,
    width: usize,
) -> ListItem<'a> {
    let t = theme::current();
    let record = entry.record;
    let id = record.id();

    let toggle = if record.is_enabled { "[on ]" } else { "[off]" };
    let mut glyph_style = t.accent;
    if record.is_enabled && effects.is_bouncing() {
        glyph_style = glyph_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    let title_style = if record.is_enabled {
        t.accent.add_modifier(Modifier::BOLD)
    } else {
        t.dim
    };

    let glyph = theme::glyph(&record.icon);
    let used = 1 + 2 + 1 + toggle.len() + 1;
    let title = truncate(&record.title, width.saturating_sub(used));
    let padding = width.saturating_sub(used + title.chars().count());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", glyph), glyph_style),
            Span::styled(title, title_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(toggle, if record.is_enabled { t.accent } else { t.dim }),
            Span::raw(" "),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(entry.date.format("%B %-d, %Y").to_string(), t.dim),
            Span::styled(
                format!("  \u{00B7} {}", countdown(entry.days_until(today))),
                t.dim.add_modifier(Modifier::ITALIC),
            ),
        ]),
    ];

    if effects.has_confetti(id) {
        lines.push(confetti_line(width));
    }
    lines.push(Line::from(""));

    let base = if selected { t.selected } else { t.card };
    let style = if effects.is_flashing(id) {
        base.patch(t.flash)
    } else {
        base
    };
    ListItem::new(lines).style(style)
}

fn countdown(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        n if n > 1 => format!("in {} days", n),
        -1 => "yesterday".to_string(),
        n => format!("{} days ago", -n),
    }
}

fn confetti_line<'a>(width: usize) -> Line<'a> {
    let sparkles = ["\u{2726}", "\u{2727}", "\u{2736}"];
    let spans: Vec<Span> = (0..width / 2)
        .map(|i| {
            let color = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
            Span::styled(
                format!("{} ", sparkles[i % sparkles.len()]),
                Style::default().fg(color),
            )
        })
        .collect();
    Line::from(spans)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::reminder::{default_reminders, upcoming};

    fn rendered(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn renders_cards_in_display_order() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 2).unwrap();
        let mut records = default_reminders(today);
        records[3].is_enabled = false;
        let entries = upcoming(&records, today);

        let mut terminal = Terminal::new(TestBackend::new(50, 40)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                ReminderList::render(frame, area, &entries, today, 0, &Effects::default());
            })
            .unwrap();

        let screen = rendered(&terminal);
        assert!(screen.contains("Reminders (5/6 on)"));
        assert!(screen.contains("August 18, 2025"));
        assert!(screen.contains("in 16 days"));
        assert!(screen.contains("[off]"));
        let anniversary = screen.find("Our Anniversary").unwrap();
        let couples = screen.find("National Couples Day").unwrap();
        assert!(anniversary < couples);
    }

    #[test]
    fn confetti_row_appears_for_enabled_toggle() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 2).unwrap();
        let records = default_reminders(today);
        let entries = upcoming(&records, today);
        let mut effects = Effects::default();
        effects.on_toggle(entries[0].record.id(), true, Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(40, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                ReminderList::render(frame, area, &entries, today, 1, &effects);
            })
            .unwrap();

        assert!(rendered(&terminal).contains('\u{2726}'));
    }

    #[test]
    fn toggled_card_flashes_over_the_selection() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 2).unwrap();
        let records = default_reminders(today);
        let entries = upcoming(&records, today);
        let t = theme::current();

        let draw = |effects: &Effects| {
            let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    ReminderList::render(frame, area, &entries, today, 0, effects);
                })
                .unwrap();
            terminal.backend().buffer()[(1, 1)].bg
        };

        assert_eq!(Some(draw(&Effects::default())), t.selected.bg);

        let mut effects = Effects::default();
        effects.on_toggle(entries[0].record.id(), false, Instant::now());
        assert_eq!(Some(draw(&effects)), t.flash.bg);
    }

    #[test]
    fn countdown_labels() {
        assert_eq!(countdown(0), "today");
        assert_eq!(countdown(1), "tomorrow");
        assert_eq!(countdown(12), "in 12 days");
        assert_eq!(countdown(-1), "yesterday");
        assert_eq!(countdown(-40), "40 days ago");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Valentine's Day", 20), "Valentine's Day");
        assert_eq!(truncate("Valentine's Day", 8), "Valen...");
        assert_eq!(truncate("\u{2665}\u{2665}\u{2665}\u{2665}", 2), "\u{2665}\u{2665}");
    }
}
