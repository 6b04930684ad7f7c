pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::controller::HeadlineFeedController;

use self::app::HeadlinesApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut app = HeadlinesApp::new(HeadlineFeedController::new(
        ctx.client.clone(),
        ctx.config.feed.country.clone(),
        ctx.config.feed.api_key.clone(),
    ));
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let colors = &ctx.config.colors;
    let keys = &ctx.config.keybindings;

    // Initial fetch: draw the loading state once, then populate.
    app.controller.toggle_refresh();

    loop {
        terminal.draw(|frame| layout::render(frame, &mut app, colors))?;

        // One attempt per pending refresh token, drawn in between so
        // the loading indicator is visible while the call is out.
        while app.controller.take_refresh_request() {
            app.set_status("Refreshing headlines...".to_string());
            terminal.draw(|frame| layout::render(frame, &mut app, colors))?;

            app.controller.request_fetch().await;
            app.sync_selection();
            app.set_status(format!(
                "Refreshed: {} headlines",
                app.controller.state().len()
            ));

            terminal.draw(|frame| layout::render(frame, &mut app, colors))?;
        }

        match event_handler.next()? {
            AppEvent::Key(key) => match keys.action_for(&key) {
                Action::Quit => {
                    app.should_quit = true;
                }
                Action::MoveUp => {
                    app.move_up();
                }
                Action::MoveDown => {
                    app.move_down();
                }
                Action::NextPage => {
                    app.next_page();
                }
                Action::PrevPage => {
                    app.prev_page();
                }
                Action::Refresh => {
                    app.controller.toggle_refresh();
                }
                Action::OpenInBrowser => {
                    open_focused_card(&mut app);
                }
                Action::None => {}
            },
            AppEvent::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn open_focused_card(app: &mut HeadlinesApp) {
    let Some(index) = app.focused_index() else {
        return;
    };

    match app.controller.link_at(index) {
        Some(link) => {
            if let Err(e) = open::that(link) {
                app.set_status(format!("Failed to open browser: {}", e));
            }
        }
        None => {
            app.set_status("No article link for this card".to_string());
        }
    }
}
