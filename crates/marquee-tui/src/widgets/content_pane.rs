//! Promotional content revealed by the split.
//!
//! The copy is wrapped here rather than by `Paragraph` so the scroll
//! range is exact: `max_scroll` is derived from the same wrapped rows
//! the renderer draws.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::Theme;

/// Horizontal padding inside the reveal band
const PADDING: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Heading(&'static str),
    Lead(&'static str),
    Body(&'static str),
    Bullet(&'static str),
    Blank,
}

const COPY: &[Element] = &[
    Element::Blank,
    Element::Heading("YOUR VISION"),
    Element::Lead("MADE IN GLOBESOFT SOLUTIONS"),
    Element::Blank,
    Element::Body(
        "Transform your ideas into reality with our cutting-edge development \
         solutions. We specialize in creating exceptional digital experiences \
         that drive results.",
    ),
    Element::Blank,
    Element::Heading("WHY CHOOSE US"),
    Element::Blank,
    Element::Bullet("Innovation: cutting-edge technologies and creative solutions"),
    Element::Bullet("Quality: premium code quality and attention to detail"),
    Element::Bullet("Results: measurable outcomes that drive business growth"),
    Element::Blank,
    Element::Heading("OUR SERVICES"),
    Element::Blank,
    Element::Lead("WEB DEVELOPMENT"),
    Element::Body(
        "Custom web applications built with modern technologies. From \
         responsive websites to complex web platforms, we deliver scalable \
         solutions that grow with your business.",
    ),
    Element::Bullet("React and Next.js applications"),
    Element::Bullet("E-commerce platforms"),
    Element::Bullet("Progressive web apps"),
    Element::Bullet("API development and integration"),
    Element::Blank,
    Element::Lead("MOBILE DEVELOPMENT"),
    Element::Body(
        "Native and cross-platform mobile applications that provide \
         exceptional user experiences across all devices.",
    ),
    Element::Bullet("iOS and Android native apps"),
    Element::Bullet("React Native solutions"),
    Element::Bullet("Flutter applications"),
    Element::Bullet("App store optimization"),
    Element::Blank,
    Element::Heading("OUR PROCESS"),
    Element::Blank,
    Element::Bullet("1. Discovery: understanding your vision, goals, and requirements"),
    Element::Bullet("2. Design: creating intuitive and beautiful user experiences"),
    Element::Bullet("3. Development: building robust and scalable solutions"),
    Element::Bullet("4. Launch: deploying and supporting your successful project"),
    Element::Blank,
    Element::Heading("READY TO GET STARTED?"),
    Element::Blank,
    Element::Body(
        "Let's transform your ideas into reality. Contact us today to discuss \
         your next project.",
    ),
    Element::Blank,
    Element::Lead("[ START YOUR PROJECT ]"),
    Element::Blank,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Heading,
    Lead,
    Body,
    Bullet,
    Blank,
}

/// Greedy word wrap honoring display width. A word wider than the line
/// gets a row of its own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// The full copy wrapped to the given total width (padding included).
fn wrapped_rows(width: u16) -> Vec<(RowKind, String)> {
    let inner = width.saturating_sub(PADDING * 2).max(16) as usize;
    let mut rows = Vec::new();
    for element in COPY {
        match element {
            Element::Heading(text) => {
                for row in wrap(text, inner) {
                    rows.push((RowKind::Heading, row));
                }
            }
            Element::Lead(text) => {
                for row in wrap(text, inner) {
                    rows.push((RowKind::Lead, row));
                }
            }
            Element::Body(text) => {
                for row in wrap(text, inner) {
                    rows.push((RowKind::Body, row));
                }
            }
            Element::Bullet(text) => {
                for (i, row) in wrap(text, inner.saturating_sub(2).max(1)).into_iter().enumerate() {
                    let prefix = if i == 0 { "* " } else { "  " };
                    rows.push((RowKind::Bullet, format!("{prefix}{row}")));
                }
            }
            Element::Blank => rows.push((RowKind::Blank, String::new())),
        }
    }
    rows
}

/// Total wrapped height of the copy at this width
pub fn line_count(width: u16) -> u16 {
    wrapped_rows(width).len() as u16
}

/// Scrollable range for a viewport of the given size
pub fn max_scroll(width: u16, viewport_rows: u16) -> u16 {
    line_count(width).saturating_sub(viewport_rows)
}

fn style_for(kind: RowKind, theme: &Theme) -> Style {
    match kind {
        RowKind::Heading => Style::default()
            .fg(theme.reveal_fg)
            .add_modifier(Modifier::BOLD),
        RowKind::Lead => Style::default().fg(theme.accent),
        RowKind::Body => Style::default().fg(theme.reveal_fg),
        RowKind::Bullet => Style::default().fg(theme.reveal_muted),
        RowKind::Blank => Style::default(),
    }
}

pub struct ContentPaneWidget;

impl ContentPaneWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let theme = &app.theme;
        let inner = Rect::new(
            area.x + PADDING.min(area.width / 2),
            area.y,
            area.width.saturating_sub(PADDING * 2),
            area.height,
        );

        let lines: Vec<Line> = wrapped_rows(area.width)
            .into_iter()
            .map(|(kind, row)| {
                let line = Line::from(Span::styled(row, style_for(kind, theme)));
                match kind {
                    RowKind::Heading | RowKind::Lead => line.centered(),
                    _ => line,
                }
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(theme.reveal_bg))
            .scroll((app.content.offset(), 0));
        frame.render_widget(paragraph, inner);
    }
}
