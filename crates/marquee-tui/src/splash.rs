//! Timed loading splash.
//!
//! Fully visible for a fixed duration, then faded out over a short
//! window, then unmounted. The timeline math is pure so the timing can
//! be tested without a clock; rendering dims the brand mark toward the
//! background as the fade progresses.

use std::time::{Duration, Instant};

use marquee_core::SplashConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Where the splash is in its fixed timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashPhase {
    Visible,
    /// Fading out; the value is fade progress in (0, 1)
    FadingOut(f64),
    Done,
}

#[derive(Debug, Clone)]
pub struct SplashTimeline {
    started: Instant,
    duration: Duration,
    fade: Duration,
}

impl SplashTimeline {
    /// Start the timeline now.
    pub fn new(config: &SplashConfig) -> Self {
        Self {
            started: Instant::now(),
            duration: Duration::from_millis(config.duration_ms),
            fade: Duration::from_millis(config.fade_ms),
        }
    }

    pub fn phase(&self) -> SplashPhase {
        phase_at(self.started.elapsed(), self.duration, self.fade)
    }

    pub fn is_done(&self) -> bool {
        self.phase() == SplashPhase::Done
    }
}

fn phase_at(elapsed: Duration, duration: Duration, fade: Duration) -> SplashPhase {
    if elapsed < duration {
        SplashPhase::Visible
    } else if elapsed < duration + fade {
        let t = (elapsed - duration).as_secs_f64() / fade.as_secs_f64();
        SplashPhase::FadingOut(t)
    } else {
        SplashPhase::Done
    }
}

/// Linear blend between two RGB colors; other color kinds pass through.
fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ => from,
    }
}

pub struct SplashWidget;

impl SplashWidget {
    pub fn render(frame: &mut Frame, area: Rect, phase: SplashPhase, theme: &Theme) {
        let t = match phase {
            SplashPhase::Visible => 0.0,
            SplashPhase::FadingOut(t) => t,
            SplashPhase::Done => 1.0,
        };
        let fg = blend(theme.reveal_fg, theme.reveal_bg, t);
        let muted = blend(theme.reveal_muted, theme.reveal_bg, t);

        frame.render_widget(Block::default().style(Style::default().bg(theme.reveal_bg)), area);

        let lines = vec![
            Line::from(Span::styled(
                "GLOBESOFT SOLUTIONS",
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("YOUR VISION. OUR EXPERTISE.", Style::default().fg(muted))),
        ];

        let text_height = lines.len() as u16;
        let top = area.y + area.height.saturating_sub(text_height) / 2;
        let centered = Rect::new(area.x, top, area.width, text_height.min(area.height));

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(3500);
    const FADE: Duration = Duration::from_millis(500);

    #[test]
    fn visible_through_the_hold_window() {
        assert_eq!(phase_at(Duration::ZERO, DURATION, FADE), SplashPhase::Visible);
        assert_eq!(
            phase_at(Duration::from_millis(3499), DURATION, FADE),
            SplashPhase::Visible
        );
    }

    #[test]
    fn fades_with_increasing_t() {
        match phase_at(Duration::from_millis(3500), DURATION, FADE) {
            SplashPhase::FadingOut(t) => assert!(t < 0.01),
            other => panic!("expected fade, got {:?}", other),
        }
        match phase_at(Duration::from_millis(3750), DURATION, FADE) {
            SplashPhase::FadingOut(t) => assert!((t - 0.5).abs() < 0.01),
            other => panic!("expected fade, got {:?}", other),
        }
    }

    #[test]
    fn done_after_the_fade() {
        assert_eq!(phase_at(Duration::from_millis(4000), DURATION, FADE), SplashPhase::Done);
        assert_eq!(phase_at(Duration::from_secs(60), DURATION, FADE), SplashPhase::Done);
    }

    #[test]
    fn zero_fade_skips_straight_to_done() {
        assert_eq!(
            phase_at(Duration::from_millis(3500), DURATION, Duration::ZERO),
            SplashPhase::Done
        );
    }

    #[test]
    fn blend_endpoints() {
        let a = Color::Rgb(0xf0, 0x00, 0x40);
        let b = Color::Rgb(0x00, 0x80, 0x40);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color::Rgb(0x78, 0x40, 0x40));
    }
}
