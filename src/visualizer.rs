//! The retained key-grid model for one language.
//!
//! Owns the on-screen state the renderer draws every frame: key cells
//! with their resting and current paint, the button registry that maps
//! every visible symbol to its cells, and the highlight state machine
//! (idle -> pressed -> dimmed after 200ms -> idle). The widget tree is
//! destroyed and rebuilt on every language switch; only the cells of
//! the active visualizer exist at any moment.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::constants::HIGHLIGHT_DIM_MS;
use crate::layouts::{self, Grid};
use crate::models::Language;

/// Index of a key cell within the current widget tree.
pub type CellId = usize;

/// Paint state of a key cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Base color (accented for home-row keys).
    Resting,
    /// Bright, just pressed.
    Pressed,
    /// Dimmed-but-still-marked, 200ms after the press.
    Dimmed,
}

/// One key cell of the built grid.
#[derive(Debug, Clone)]
pub struct KeyCell {
    /// Label drawn in the cell.
    pub label: String,
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
    /// Width weight from the shared position table.
    pub weight: u32,
    /// Whether this is one of the two home-row marker keys.
    pub home_row: bool,
    /// Current paint state.
    pub paint: Paint,
}

/// Visual keyboard for one language.
pub struct Visualizer {
    language: Language,
    cells: Vec<KeyCell>,
    /// Symbol (both cases, both shift-pair members) -> cells showing it.
    registry: HashMap<String, Vec<CellId>>,
    /// Grid position -> cell, kept for layout bookkeeping.
    by_position: HashMap<(usize, usize), CellId>,
    /// Typed-text display content; `None` while the tree is torn down.
    text_display: Option<String>,
    /// Most recently highlighted cell set.
    last_pressed: Vec<CellId>,
    /// Deadline for the pressed -> dimmed transition.
    pending_dim: Option<(Instant, Vec<CellId>)>,
}

impl Visualizer {
    /// Creates a visualizer with no widget tree; call
    /// [`build_layout`](Self::build_layout) before rendering.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            cells: Vec::new(),
            registry: HashMap::new(),
            by_position: HashMap::new(),
            text_display: None,
            last_pressed: Vec::new(),
            pending_dim: None,
        }
    }

    /// The language this visualizer renders.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Destroys any existing tree and constructs the grid from the
    /// layout configuration, seeding the text display with
    /// `initial_text` (a single space when empty).
    pub fn build_layout(&mut self, initial_text: &str) {
        self.teardown();

        let grid: Grid = layouts::grid(self.language);
        let home_row = layouts::home_row_keys(self.language);

        for (row_idx, row) in grid.iter().enumerate() {
            for (col_idx, def) in row.iter().enumerate() {
                let id = self.cells.len();
                self.cells.push(KeyCell {
                    label: def.display(),
                    row: row_idx,
                    col: col_idx,
                    weight: layouts::position_weight(row_idx, col_idx),
                    home_row: home_row.contains(&def.base),
                    paint: Paint::Resting,
                });
                self.by_position.insert((row_idx, col_idx), id);
                for symbol in def.symbols() {
                    self.register_symbol(symbol, id);
                }
            }
        }

        self.text_display = Some(display_text(initial_text));
    }

    /// Destroys the widget tree and clears the registries.
    pub fn teardown(&mut self) {
        self.cells.clear();
        self.registry.clear();
        self.by_position.clear();
        self.last_pressed.clear();
        self.pending_dim = None;
        self.text_display = None;
    }

    /// Whether a widget tree currently exists.
    pub fn has_tree(&self) -> bool {
        !self.cells.is_empty()
    }

    /// The key cells, in grid order, for rendering.
    pub fn cells(&self) -> &[KeyCell] {
        &self.cells
    }

    /// The cell at a grid position, if the tree is built.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&KeyCell> {
        self.by_position.get(&(row, col)).map(|&id| &self.cells[id])
    }

    /// Current text display content, if the tree is built.
    pub fn text_display(&self) -> Option<&str> {
        self.text_display.as_deref()
    }

    /// Sets the text display content (single space when empty). A
    /// torn-down tree makes this a no-op, matching the tolerance for
    /// updates racing a layout switch.
    pub fn update_text_display(&mut self, text: &str) {
        if self.text_display.is_some() {
            self.text_display = Some(display_text(text));
        }
    }

    /// Highlights the cells matching `name`.
    ///
    /// Resolution tries, in order: lowercase, uppercase, the raw name,
    /// then a substring/equality scan over `aliases` for a display
    /// label that resolves. An empty result is a silent no-op.
    ///
    /// Re-highlighting the exact set that is already highlighted clears
    /// it instead (toggle-off). This keeps the listener's key-repeat
    /// auto-fire from stacking highlights forever, at the documented
    /// cost that two rapid independent presses of the same key cancel
    /// visually rather than re-pulse.
    pub fn highlight_key(&mut self, name: &str, aliases: &[(&str, &str)], now: Instant) {
        if !self.has_tree() {
            return;
        }

        let targets = self.find_cells(name, aliases);
        if targets.is_empty() {
            return;
        }

        if targets == self.last_pressed {
            self.paint_cells(&self.last_pressed.clone(), Paint::Resting);
            self.last_pressed.clear();
            return;
        }

        self.paint_cells(&self.last_pressed.clone(), Paint::Resting);
        self.paint_cells(&targets, Paint::Pressed);
        self.pending_dim = Some((
            now + Duration::from_millis(HIGHLIGHT_DIM_MS),
            targets.clone(),
        ));
        self.last_pressed = targets;
    }

    /// Force-clears the current highlight set back to resting colors.
    pub fn reset_highlights(&mut self) {
        self.paint_cells(&self.last_pressed.clone(), Paint::Resting);
        self.last_pressed.clear();
    }

    /// Applies the pressed -> dimmed transition once its deadline has
    /// passed, but only to cells still in the current highlight set. A
    /// newer press supersedes the pending transition for the old set.
    pub fn tick(&mut self, now: Instant) {
        let due = matches!(self.pending_dim, Some((deadline, _)) if now >= deadline);
        if !due {
            return;
        }
        if let Some((_, cells)) = self.pending_dim.take() {
            for id in cells {
                if self.last_pressed.contains(&id) {
                    if let Some(cell) = self.cells.get_mut(id) {
                        cell.paint = Paint::Dimmed;
                    }
                }
            }
        }
    }

    fn register_symbol(&mut self, symbol: &str, id: CellId) {
        let lower = symbol.to_lowercase();
        let upper = symbol.to_uppercase();
        self.registry.entry(lower.clone()).or_default().push(id);
        if upper != lower {
            self.registry.entry(upper).or_default().push(id);
        }
    }

    fn find_cells(&self, name: &str, aliases: &[(&str, &str)]) -> Vec<CellId> {
        let lower = name.to_lowercase();
        let upper = name.to_uppercase();

        if let Some(cells) = self.registry.get(&lower) {
            return cells.clone();
        }
        if let Some(cells) = self.registry.get(&upper) {
            return cells.clone();
        }
        if let Some(cells) = self.registry.get(name) {
            return cells.clone();
        }

        // Alias scan: a canonical name contained in (or equal to) the
        // pressed name resolves to its on-grid display label.
        for (canonical, display) in aliases {
            if lower.contains(canonical) || lower == *canonical {
                if let Some(cells) = self.registry.get(&display.to_lowercase()) {
                    return cells.clone();
                }
            }
        }

        Vec::new()
    }

    fn paint_cells(&mut self, ids: &[CellId], paint: Paint) {
        for &id in ids {
            if let Some(cell) = self.cells.get_mut(id) {
                cell.paint = paint;
            }
        }
    }
}

/// A single space keeps the display row visible when the buffer is empty.
fn display_text(text: &str) -> String {
    if text.is_empty() {
        " ".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::SPECIAL_KEY_ALIASES;

    fn built(language: Language) -> Visualizer {
        let mut vis = Visualizer::new(language);
        vis.build_layout("");
        vis
    }

    fn pressed_cells(vis: &Visualizer) -> Vec<usize> {
        vis.cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.paint == Paint::Pressed)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_build_layout_registers_both_cases() {
        let vis = built(Language::English);
        assert!(vis.has_tree());
        assert!(vis.registry.contains_key("q"));
        assert!(vis.registry.contains_key("Q"));
        // Shift-pair members resolve to the same cell.
        assert_eq!(vis.registry["1"], vis.registry["!"]);
    }

    #[test]
    fn test_home_row_accent() {
        let vis = built(Language::English);
        let marked: Vec<&str> = vis
            .cells()
            .iter()
            .filter(|c| c.home_row)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(marked, vec!["F", "J"]);
    }

    #[test]
    fn test_highlight_then_dim() {
        let mut vis = built(Language::English);
        let t0 = Instant::now();
        vis.highlight_key("a", SPECIAL_KEY_ALIASES, t0);
        assert_eq!(pressed_cells(&vis).len(), 1);

        // Before the deadline nothing changes.
        vis.tick(t0 + Duration::from_millis(100));
        assert_eq!(pressed_cells(&vis).len(), 1);

        vis.tick(t0 + Duration::from_millis(250));
        assert!(pressed_cells(&vis).is_empty());
        assert!(vis.cells().iter().any(|c| c.paint == Paint::Dimmed));
    }

    #[test]
    fn test_same_set_toggles_off() {
        let mut vis = built(Language::English);
        let t0 = Instant::now();
        vis.highlight_key("a", SPECIAL_KEY_ALIASES, t0);
        assert_eq!(pressed_cells(&vis).len(), 1);

        // Uppercase resolves to the same cell set -> toggle-off.
        vis.highlight_key("A", SPECIAL_KEY_ALIASES, t0);
        assert!(pressed_cells(&vis).is_empty());
        assert!(vis.last_pressed.is_empty());

        // The stale dim deadline no longer applies to anything.
        vis.tick(t0 + Duration::from_millis(250));
        assert!(vis.cells().iter().all(|c| c.paint == Paint::Resting));
    }

    #[test]
    fn test_newer_press_supersedes_pending_dim() {
        let mut vis = built(Language::English);
        let t0 = Instant::now();
        vis.highlight_key("a", SPECIAL_KEY_ALIASES, t0);
        vis.highlight_key("b", SPECIAL_KEY_ALIASES, t0 + Duration::from_millis(50));

        vis.tick(t0 + Duration::from_millis(260));
        // Only the newer set dims; the older one was reset by the press.
        let dimmed: Vec<&str> = vis
            .cells()
            .iter()
            .filter(|c| c.paint == Paint::Dimmed)
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(dimmed, vec!["B"]);
    }

    #[test]
    fn test_alias_resolution() {
        let mut vis = built(Language::English);
        vis.highlight_key("caps_lock", SPECIAL_KEY_ALIASES, Instant::now());
        let pressed = pressed_cells(&vis);
        assert_eq!(pressed.len(), 1);
        assert_eq!(vis.cells()[pressed[0]].label, "Caps");
    }

    #[test]
    fn test_both_shift_cells_highlight_together() {
        let mut vis = built(Language::English);
        vis.highlight_key("shift_r", SPECIAL_KEY_ALIASES, Instant::now());
        assert_eq!(pressed_cells(&vis).len(), 2);
    }

    #[test]
    fn test_unresolvable_name_is_noop() {
        let mut vis = built(Language::English);
        vis.highlight_key("num_lock", SPECIAL_KEY_ALIASES, Instant::now());
        assert!(pressed_cells(&vis).is_empty());
        assert!(vis.last_pressed.is_empty());
    }

    #[test]
    fn test_russian_glyph_resolves() {
        let mut vis = built(Language::Russian);
        vis.highlight_key("а", SPECIAL_KEY_ALIASES, Instant::now());
        let pressed = pressed_cells(&vis);
        assert_eq!(pressed.len(), 1);
        assert_eq!(vis.cells()[pressed[0]].label, "А");
    }

    #[test]
    fn test_text_display_empty_shows_space() {
        let mut vis = built(Language::English);
        assert_eq!(vis.text_display(), Some(" "));
        vis.update_text_display("hi");
        assert_eq!(vis.text_display(), Some("hi"));
        vis.update_text_display("");
        assert_eq!(vis.text_display(), Some(" "));
    }

    #[test]
    fn test_torn_down_tree_tolerates_everything() {
        let mut vis = Visualizer::new(Language::English);
        vis.update_text_display("ignored");
        vis.highlight_key("a", SPECIAL_KEY_ALIASES, Instant::now());
        vis.reset_highlights();
        vis.tick(Instant::now());
        assert!(!vis.has_tree());
        assert_eq!(vis.text_display(), None);
    }

    #[test]
    fn test_rebuild_clears_registry() {
        let mut vis = built(Language::English);
        let cells_before = vis.cells().len();
        vis.build_layout("kept");
        assert_eq!(vis.cells().len(), cells_before);
        assert_eq!(vis.text_display(), Some("kept"));
    }
}
