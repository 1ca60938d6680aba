use std::io::{self, stdout};
use std::sync::{Arc, Mutex};

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

mod app;
mod cli;
mod error;
mod metrics;
mod models;
mod recommend;
mod theme;
mod ui;
mod watcher;

use app::App;
use models::{DashboardView, Sprint};

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;

    // Load and validate before touching the terminal so errors print
    // normally.
    let sprint = match &config.sprint_file {
        Some(path) => Sprint::load(path)?,
        None => {
            println!("No sprint file given, using the bundled sample sprint.");
            Sprint::sample()?
        }
    };
    sprint
        .validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    let needs_reload = Arc::new(Mutex::new(false));
    // The watcher must stay alive for the life of the program.
    let _watcher = match (&config.sprint_file, config.watch) {
        (Some(path), true) => watcher::setup_sprint_watcher(path.clone(), Arc::clone(&needs_reload)),
        _ => None,
    };

    let mut app = App::new(sprint, config.sprint_file, needs_reload);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.reload_sprint_if_needed();
        app.update_animation();

        terminal.draw(|frame| ui::render_dashboard(frame, app))?;

        // Handle input
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Handle one key event. Returns true when the app should exit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab => app.cycle_view(),
        KeyCode::Char('1') => app.set_view(DashboardView::Overview),
        KeyCode::Char('2') => app.set_view(DashboardView::Developers),
        KeyCode::Char('3') => app.set_view(DashboardView::Timeline),
        KeyCode::Char('r') => app.request_reload(),
        KeyCode::Up => match app.view {
            DashboardView::Developers => app.select_previous_developer(),
            DashboardView::Timeline => app.scroll_timeline_up(),
            DashboardView::Overview => {}
        },
        KeyCode::Down => match app.view {
            DashboardView::Developers => app.select_next_developer(),
            DashboardView::Timeline => app.scroll_timeline_down(),
            DashboardView::Overview => {}
        },
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.view == DashboardView::Developers {
                app.toggle_developer_details();
            }
        }
        KeyCode::Char('s') => {
            if app.view == DashboardView::Developers {
                app.toggle_sort_mode();
            }
        }
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn test_app() -> App {
        let sprint = Sprint::sample().unwrap();
        App::new(sprint, None, Arc::new(Mutex::new(false)))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))));
        assert!(handle_key(&mut app, press(KeyCode::Esc)));
        assert!(handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
        assert!(!handle_key(&mut app, press(KeyCode::Char('c'))));
    }

    #[test]
    fn test_tab_cycles_views() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view, DashboardView::Developers);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view, DashboardView::Timeline);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view, DashboardView::Overview);
    }

    #[test]
    fn test_number_keys_jump_to_view() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.view, DashboardView::Timeline);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.view, DashboardView::Overview);
    }

    #[test]
    fn test_arrows_only_act_on_active_view() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.selected_dev, 0);
        assert_eq!(app.timeline_scroll, 0);

        app.set_view(DashboardView::Developers);
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.selected_dev, 1);
        assert_eq!(app.timeline_scroll, 0);
    }

    #[test]
    fn test_sort_and_details_bound_to_developers_view() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('s')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.dev_expanded);

        app.set_view(DashboardView::Developers);
        handle_key(&mut app, press(KeyCode::Char('s')));
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.dev_expanded);
        assert_eq!(app.dev_sort.label(), "Utilization");
    }

    #[test]
    fn test_reload_key_sets_flag() {
        let mut app = test_app();
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert!(*app.sprint_needs_reload.lock().unwrap());
    }
}
