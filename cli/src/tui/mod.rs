pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use staygrid_core::{BoardService, RoomCategory, SampleDirectory, ViewEvent};

use crate::tui::app::App;

pub fn run(service: BoardService<SampleDirectory>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(service);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if app.state.week_picker_open {
                    match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Esc | KeyCode::Char('w') => app.dispatch(ViewEvent::ToggleWeekPicker),
                        KeyCode::Down | KeyCode::Char('j') => app.picker_next(),
                        KeyCode::Up | KeyCode::Char('k') => app.picker_previous(),
                        KeyCode::Enter => app.pick_highlighted_week(),
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left | KeyCode::Char('h') => app.dispatch(ViewEvent::PreviousWeek),
                        KeyCode::Right | KeyCode::Char('l') => app.dispatch(ViewEvent::NextWeek),
                        KeyCode::Char('t') => app.dispatch(ViewEvent::JumpToToday),
                        KeyCode::Char('w') | KeyCode::Enter => app.open_week_picker(),
                        KeyCode::Char('s') => app.dispatch(ViewEvent::ToggleSection(RoomCategory::Superior)),
                        KeyCode::Char('d') => app.dispatch(ViewEvent::ToggleSection(RoomCategory::Standard)),
                        _ => {}
                    }
                }
            }
        }
    }
}
