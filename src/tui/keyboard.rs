//! Keyboard widget for rendering the visual key grid

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme::Theme;
use crate::visualizer::{KeyCell, Paint, Visualizer};

/// Keyboard widget renders the active visualizer's key cells
pub struct KeyboardWidget;

impl KeyboardWidget {
    /// Render the keyboard widget
    pub fn render(f: &mut Frame, area: Rect, visualizer: &Visualizer, theme: &Theme) {
        if !visualizer.has_tree() {
            // Mid-switch there is briefly no tree; draw an empty block
            // rather than stale cells.
            let empty = Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background));
            f.render_widget(empty, area);
            return;
        }

        // Group cells by grid row, preserving column order.
        let mut rows: Vec<Vec<&KeyCell>> = Vec::new();
        for cell in visualizer.cells() {
            if cell.row >= rows.len() {
                rows.resize_with(cell.row + 1, Vec::new);
            }
            rows[cell.row].push(cell);
        }

        let row_constraints = vec![Constraint::Length(3); rows.len()];
        let row_areas = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(area);

        for (row, row_area) in rows.iter().zip(row_areas.iter()) {
            Self::render_row(f, *row_area, row, theme);
        }
    }

    fn render_row(f: &mut Frame, area: Rect, row: &[&KeyCell], theme: &Theme) {
        // Width weights come from the shared position table, so the
        // same column lines up across both language grids.
        let total: u32 = row.iter().map(|cell| cell.weight).sum();
        let constraints: Vec<Constraint> = row
            .iter()
            .map(|cell| Constraint::Ratio(cell.weight, total.max(1)))
            .collect();
        let cell_areas = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (cell, cell_area) in row.iter().zip(cell_areas.iter()) {
            f.render_widget(Self::cell_widget(cell, theme), *cell_area);
        }
    }

    fn cell_widget<'a>(cell: &'a KeyCell, theme: &Theme) -> Paragraph<'a> {
        let (bg, fg) = match cell.paint {
            Paint::Pressed => (theme.key_pressed_bg, theme.key_pressed_fg),
            Paint::Dimmed => (theme.key_dimmed_bg, theme.text),
            Paint::Resting => {
                let bg = if cell.home_row {
                    theme.key_home_row
                } else {
                    theme.key_resting
                };
                (bg, theme.text)
            }
        };

        let style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);
        Paragraph::new(cell.label.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style))
    }
}
