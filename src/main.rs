mod app;
mod chime;
mod components;
mod config;
mod effects;
mod event;
mod logging;
mod notify;
mod reminder;
mod storage;
mod theme;
mod tui;

use std::time::{Duration, Instant};

use app::{App, InputMode};
use chrono::Local;
use color_eyre::Result;
use config::Config;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Layout};

const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    color_eyre::install()?;

    let loaded = Config::load();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => Config::default(),
    };
    logging::init(&config.data_dir(), &config.log_level);
    if let Err(err) = loaded {
        log::warn!("{}; using defaults", err);
    }
    theme::init(&config.theme);

    log::info!("starting, data in {}", config.data_dir().display());
    let mut app = App::new(&config);

    let mut terminal = tui::init()?;
    let result = run(&mut terminal, &mut app);
    tui::restore()?;
    log::info!("exiting");
    result
}

fn run(terminal: &mut tui::Tui, app: &mut App) -> Result<()> {
    while app.running {
        app.tick(Local::now().date_naive(), Instant::now());

        terminal.draw(|frame| {
            let area = frame.area();
            let layout = Layout::vertical([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

            components::Header::render(frame, layout[0]);

            let entries = app.upcoming();
            components::ReminderList::render(
                frame,
                layout[1],
                &entries,
                app.today,
                app.selected,
                &app.effects,
            );

            if let Some(ref form) = app.form_state {
                components::DateForm::render(frame, area, form);
            }
            if app.show_help {
                components::Help::render(frame, area);
            }

            components::StatusBar::render(frame, layout[2], app);
        })?;

        if let Some(key) = event::next_key_press(TICK)? {
            app.status_message = None;

            if app.show_help {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                    app.show_help = false;
                }
                continue;
            }

            match app.input_mode {
                InputMode::DateForm => handle_form_input(app, key.code),
                InputMode::Normal => handle_normal_input(app, key.code, key.modifiers),
            }
        }
    }

    Ok(())
}

fn handle_normal_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match (code, modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.running = false;
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.select_next(),
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.select_prev(),
        (KeyCode::Char(' '), _) => app.toggle_selected(Instant::now()),
        (KeyCode::Char('e'), _) | (KeyCode::Enter, _) => app.open_date_form(),
        (KeyCode::Char('t'), _) => app.refresh_today(),
        (KeyCode::Char('?'), _) => app.show_help = true,
        _ => {}
    }
}

fn handle_form_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc => app.close_date_form(),
        KeyCode::Enter => app.submit_date_form(),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Up => app.form_shift_days(1),
        KeyCode::Down => app.form_shift_days(-1),
        KeyCode::Char(']') => app.form_shift_months(1),
        KeyCode::Char('[') => app.form_shift_months(-1),
        KeyCode::Char(c) => app.form_input_char(c),
        _ => {}
    }
}
