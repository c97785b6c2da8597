use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Stage};
use marquee_core::Phase;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let phase_str = match app.stage {
            Stage::Splash => "LOADING",
            Stage::Landing => match app.phase() {
                Phase::Idle => "TOP",
                Phase::Animating => "SPLITTING",
                Phase::SplitComplete => "BROWSING",
                Phase::Reversing => "CLOSING",
            },
        };

        let status_text = format!(
            " {} | {:.0}%",
            phase_str,
            app.transition.progress() * 100.0
        );

        let help_hint = " q:quit  wheel/j/k:scroll ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.bar_fg).bg(theme.bar_bg),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bar_bg)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.bar_muted).bg(theme.bar_bg),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
