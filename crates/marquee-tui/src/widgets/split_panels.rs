//! The two sliding panels and the reveal band between them.
//!
//! Panel geometry is a direct function of transition progress: the
//! reveal band grows from the vertical center while the cream panels
//! shrink symmetrically toward the edges.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::widgets::content_pane::ContentPaneWidget;
use marquee_core::Phase;

/// Row allocation for the three bands of the split at a given progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bands {
    pub top: u16,
    pub reveal: u16,
    pub bottom: u16,
}

/// Split a viewport of `height` rows around a centered reveal band.
/// The three bands always sum to `height`.
pub fn bands(progress: f64, height: u16) -> Bands {
    let progress = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let reveal = ((progress * height as f64).round() as u16).min(height);
    let remaining = height - reveal;
    let top = remaining / 2;
    Bands {
        top,
        reveal,
        bottom: remaining - top,
    }
}

pub struct SplitPanelsWidget;

impl SplitPanelsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let bands = bands(app.transition.progress(), area.height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(bands.top),
                Constraint::Length(bands.reveal),
                Constraint::Length(bands.bottom),
            ])
            .split(area);

        Self::render_top_panel(frame, chunks[0], app);
        Self::render_reveal(frame, chunks[1], app);
        Self::render_bottom_panel(frame, chunks[2], app);
    }

    fn render_top_panel(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.panel_bg)), area);

        // Text hugs the tear line at the bottom of the panel.
        let lines = vec![
            Line::from(Span::styled("BEST IN CLASS", Style::default().fg(theme.panel_muted))),
            Line::from(Span::styled(
                "Y O U R   V I S I O N",
                Style::default().fg(theme.panel_fg).add_modifier(Modifier::BOLD),
            )),
        ];
        let text_area = bottom_rows(area, lines.len() as u16 + 1);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
    }

    fn render_bottom_panel(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.panel_bg)), area);

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "O U R   E X P E R T I S E",
                Style::default().fg(theme.panel_fg).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "MADE IN GLOBESOFT SOLUTIONS",
                Style::default().fg(theme.panel_muted),
            )),
        ];
        if app.phase() == Phase::Idle && area.height >= 7 {
            lines.push(Line::from(""));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "v  S C R O L L  v",
                Style::default().fg(theme.accent),
            )));
        }
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_reveal(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.reveal_bg)),
            area,
        );
        if app.transition.content_visible() {
            ContentPaneWidget::render(frame, area, app);
        }
    }
}

/// The bottom `rows` of an area (or the whole area when shorter).
fn bottom_rows(area: Rect, rows: u16) -> Rect {
    let rows = rows.min(area.height);
    Rect::new(area.x, area.y + area.height - rows, area.width, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_split_is_two_half_panels() {
        let b = bands(0.0, 40);
        assert_eq!(b, Bands { top: 20, reveal: 0, bottom: 20 });
    }

    #[test]
    fn open_split_is_all_reveal() {
        let b = bands(1.0, 40);
        assert_eq!(b, Bands { top: 0, reveal: 40, bottom: 0 });
    }

    #[test]
    fn bands_always_sum_to_height() {
        for height in [0u16, 1, 2, 23, 40, 57] {
            for i in 0..=20 {
                let b = bands(i as f64 / 20.0, height);
                assert_eq!(b.top + b.reveal + b.bottom, height);
            }
        }
    }

    #[test]
    fn odd_remainders_favor_the_bottom_panel() {
        let b = bands(0.0, 41);
        assert_eq!(b.reveal, 0);
        assert_eq!(b.top, 20);
        assert_eq!(b.bottom, 21);
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        assert_eq!(bands(-1.0, 40).reveal, 0);
        assert_eq!(bands(2.0, 40).reveal, 40);
        assert_eq!(bands(f64::NAN, 40).reveal, 0);
    }
}
