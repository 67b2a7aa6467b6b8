//! Status bar widget for displaying input state and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::manager::LayoutManager;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: language, case state, press counter, quit hint
    pub fn render(f: &mut Frame, area: Rect, manager: &LayoutManager, theme: &Theme) {
        let (caps, shift) = manager.active_controller().case_state();

        let flag = |name: &'static str, on: bool| {
            let style = if on {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_muted)
            };
            Span::styled(name, style)
        };

        let line = Line::from(vec![
            Span::styled("Lang: ", Style::default().fg(theme.primary)),
            Span::styled(
                manager.active_language().tag(),
                Style::default()
                    .fg(theme.title_color(manager.active_language()))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            flag("CAPS", caps),
            Span::raw(" "),
            flag("SHIFT", shift),
            Span::raw("  "),
            Span::styled("Presses: ", Style::default().fg(theme.primary)),
            Span::styled(
                manager.press_count().to_string(),
                Style::default().fg(theme.text),
            ),
            Span::raw("  "),
            Span::styled("Ctrl+Q quit", Style::default().fg(theme.text_muted)),
        ]);

        let widget = Paragraph::new(line)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background).fg(theme.primary)),
            );
        f.render_widget(widget, area);
    }
}
