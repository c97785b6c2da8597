use std::sync::Arc;

use marquee_core::{
    AppConfig, ContentScroll, ContentSignal, InputDisposition, Phase, SplitTransition,
};
use tracing::debug;

use crate::input::Action;
use crate::splash::{SplashPhase, SplashTimeline};
use crate::theme::Theme;
use crate::widgets::content_pane;

/// Content rows scrolled per wheel notch once authority is delegated
const CONTENT_SCROLL_ROWS: i32 = 2;

/// Top-level view: splash first, then the landing experience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Splash,
    Landing,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active theme
    pub theme: Theme,
    /// Current top-level view
    pub stage: Stage,
    /// Splash timeline (only consulted while stage is Splash)
    pub splash: SplashTimeline,
    /// Split-reveal transition controller
    pub transition: SplitTransition,
    /// Nested content pane scroll state
    pub content: ContentScroll,
    /// Terminal width in columns
    pub viewport_cols: u16,
    /// Terminal height in rows
    pub viewport_rows: u16,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Last row seen during a drag gesture
    last_drag_row: Option<u16>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, cols: u16, rows: u16) -> Self {
        let splash = SplashTimeline::new(&config.ui.splash);
        let transition = SplitTransition::new(config.ui.transition.clone(), rows);
        Self {
            config,
            theme,
            stage: Stage::Splash,
            splash,
            transition,
            content: ContentScroll::new(),
            viewport_cols: cols,
            viewport_rows: rows,
            should_quit: false,
            last_drag_row: None,
        }
    }

    /// Advance one frame: splash timeline, transition recompute, and the
    /// delegation handshake with the content pane.
    pub fn tick(&mut self) {
        match self.stage {
            Stage::Splash => {
                if self.splash.is_done() {
                    debug!("splash finished, mounting landing view");
                    self.stage = Stage::Landing;
                }
            }
            Stage::Landing => {
                self.transition.update();
                self.sync_delegation();
            }
        }
    }

    /// True while something is animating and the event loop should poll
    /// at the animation tick rate.
    pub fn needs_fast_update(&self) -> bool {
        match self.stage {
            Stage::Splash => matches!(self.splash.phase(), SplashPhase::FadingOut(_)),
            Stage::Landing => self.transition.needs_update(),
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport_cols = cols;
        self.viewport_rows = rows;
        self.transition.on_resize(rows);
        self.content.set_max_scroll(self.content_max_scroll());
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            // The splash takes no input besides quit
            _ if self.stage == Stage::Splash => {}
            Action::ScrollDown => self.wheel(self.config.ui.transition.wheel_step),
            Action::ScrollUp => self.wheel(-self.config.ui.transition.wheel_step),
            Action::PageDown => self.wheel(self.config.ui.transition.wheel_step * 3.0),
            Action::PageUp => self.wheel(-self.config.ui.transition.wheel_step * 3.0),
            Action::DragStart(row) => {
                self.last_drag_row = Some(row);
                self.transition.on_drag_start(row as f64);
            }
            Action::DragMove(row) => {
                let previous = self.last_drag_row.replace(row);
                if self.transition.on_drag_move(row as f64) == InputDisposition::PassThrough {
                    // Delegated: the drag scrolls the content pane instead.
                    if let Some(previous) = previous {
                        let delta = previous as i32 - row as i32;
                        self.content_scroll(delta);
                    }
                }
            }
            Action::None => {}
        }
    }

    pub fn phase(&self) -> Phase {
        self.transition.phase()
    }

    fn wheel(&mut self, delta: f64) {
        if self.transition.on_wheel(delta) == InputDisposition::PassThrough {
            let rows = if delta < 0.0 {
                -CONTENT_SCROLL_ROWS
            } else {
                CONTENT_SCROLL_ROWS
            };
            self.content_scroll(rows);
        }
    }

    fn content_scroll(&mut self, delta_rows: i32) {
        if delta_rows == 0 {
            return;
        }
        if self.content.scroll(delta_rows) == ContentSignal::ReclaimRequested {
            debug!("content pane requested reclaim");
            self.content.revoke();
            self.transition.reclaim_from_content();
        }
    }

    fn sync_delegation(&mut self) {
        if self.transition.is_delegated() && !self.content.is_delegated() {
            self.content.grant(self.content_max_scroll());
        } else if !self.transition.is_delegated() && self.content.is_delegated() {
            self.content.revoke();
        }
    }

    fn content_max_scroll(&self) -> u16 {
        // The reveal band spans everything above the one-row status bar.
        content_pane::max_scroll(self.viewport_cols, self.viewport_rows.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landing_app() -> App {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default(), 80, 40);
        app.stage = Stage::Landing;
        app
    }

    fn open_split(app: &mut App) {
        // 40 rows -> threshold 800; each notch adds 30 virtual pixels.
        for _ in 0..27 {
            app.apply(Action::ScrollDown);
        }
        app.tick();
    }

    #[test]
    fn wheel_drives_the_split_open_and_hands_off() {
        let mut app = landing_app();
        app.apply(Action::ScrollDown);
        app.tick();
        assert!(app.transition.progress() > 0.0);
        assert!(!app.content.is_delegated());

        open_split(&mut app);
        assert_eq!(app.phase(), Phase::SplitComplete);
        assert!(app.content.is_delegated());
        assert!(!app.transition.lock().is_engaged());
    }

    #[test]
    fn delegated_wheel_scrolls_content_not_transition() {
        let mut app = landing_app();
        open_split(&mut app);

        app.apply(Action::ScrollDown);
        app.tick();
        assert_eq!(app.transition.progress(), 1.0);
        assert_eq!(app.content.offset(), CONTENT_SCROLL_ROWS as u16);
    }

    #[test]
    fn scroll_to_top_gesture_reverses_the_split() {
        let mut app = landing_app();
        open_split(&mut app);

        app.apply(Action::ScrollDown);
        // Back to the top...
        app.apply(Action::ScrollUp);
        assert_eq!(app.content.offset(), 0);
        assert_eq!(app.phase(), Phase::SplitComplete);
        // ...and once more up triggers the reclaim.
        app.apply(Action::ScrollUp);
        assert_ne!(app.phase(), Phase::SplitComplete);
        assert!(app.transition.lock().is_engaged());

        let mut frames = 0;
        while app.transition.needs_update() {
            app.tick();
            frames += 1;
            assert!(frames < 200, "reverse never settled");
        }
        assert_eq!(app.phase(), Phase::Idle);
        assert!(!app.content.is_delegated());
    }

    #[test]
    fn reopening_after_reclaim_regrants_from_the_top() {
        let mut app = landing_app();
        open_split(&mut app);
        app.apply(Action::ScrollDown);
        app.apply(Action::ScrollUp);
        app.apply(Action::ScrollUp);
        while app.transition.needs_update() {
            app.tick();
        }

        open_split(&mut app);
        assert!(app.content.is_delegated());
        assert_eq!(app.content.offset(), 0);
    }

    #[test]
    fn splash_swallows_scroll_input() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default(), 80, 40);
        app.apply(Action::ScrollDown);
        assert_eq!(app.transition.virtual_scroll(), 0.0);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn resize_mid_animation_resets() {
        let mut app = landing_app();
        app.apply(Action::ScrollDown);
        app.tick();
        assert!(app.transition.progress() > 0.0);
        app.on_resize(100, 30);
        assert_eq!(app.transition.progress(), 0.0);
        assert_eq!(app.transition.threshold(), 30.0 * 25.0 * 0.8);
    }
}
