use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tracing::info;

use marquee_core::AppConfig;
use marquee_tui::{
    app::{App, Stage},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    splash::SplashWidget,
    theme::Theme,
    widgets::{SplitPanelsWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Marquee"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let theme = Theme::default();
    let mut app = App::new(config.clone(), theme, size.width, size.height);

    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.ui.transition.tick_duration(),
    );

    info!("marquee started");
    let result = event_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal on every exit path before surfacing errors
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    // Track if we need the animation frame rate for the NEXT iteration
    let mut needs_fast_update = false;

    loop {
        // Advance splash and transition state
        app.tick();

        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            match app.stage {
                Stage::Splash => {
                    SplashWidget::render(frame, main_layout[0], app.splash.phase(), &app.theme)
                }
                Stage::Landing => SplitPanelsWidget::render(frame, main_layout[0], app),
            }
            StatusBarWidget::render(frame, main_layout[1], app);
        })?;

        // Handle events (faster tick rate while animating)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.apply(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.apply(handle_mouse_event(mouse)),
                AppEvent::Resize(w, h) => app.on_resize(w, h),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
