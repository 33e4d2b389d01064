//! Platform grid - top-down view of the current pattern
//!
//! Tiles are laid out row-major. In game space tile (column, row) sits at
//! `(-column * spacing, row * spacing)` on the XZ plane; the view looks down
//! with X mirrored so column 0 is drawn on the left.

use macroquad::prelude::*;
use crate::config::EditorConfig;
use crate::pattern::{PatternStorage, PlatformModel, PlatformType};
use crate::ui::{theme, Rect, UiContext};
use super::EditorState;

/// Gap between tiles as a fraction of the cell size
const TILE_GAP: f32 = 0.08;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub spacing: f32,
}

impl GridLayout {
    pub fn new(columns: usize, rows: usize, spacing: f32) -> Self {
        Self { columns, rows, spacing }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.grid_columns, config.grid_rows, config.tile_spacing)
    }

    pub fn tile_count(&self) -> usize {
        self.columns * self.rows
    }

    pub fn index_of(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then(|| row * self.columns + column)
    }

    /// (column, row) of a linear index
    pub fn cell(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.tile_count()).then(|| (index % self.columns, index / self.columns))
    }

    /// Game-space (x, z) position of a tile
    pub fn world_position(&self, index: usize) -> Option<(f32, f32)> {
        self.cell(index)
            .map(|(column, row)| (-(column as f32) * self.spacing, row as f32 * self.spacing))
    }

    /// Side length of a square cell fitting the grid in `area`
    fn cell_size(&self, area: Rect) -> f32 {
        if self.columns == 0 || self.rows == 0 {
            return 0.0;
        }
        (area.w / self.columns as f32).min(area.h / self.rows as f32).max(0.0)
    }

    /// Top-left of the centered grid in `area`
    fn origin(&self, area: Rect, cell: f32) -> (f32, f32) {
        let (cx, cy) = area.center();
        (
            cx - cell * self.columns as f32 * 0.5,
            cy - cell * self.rows as f32 * 0.5,
        )
    }

    /// Screen rect of a tile (gap excluded)
    pub fn screen_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let (column, row) = self.cell(index)?;
        let cell = self.cell_size(area);
        let (ox, oy) = self.origin(area, cell);
        let gap = cell * TILE_GAP;
        Some(Rect::new(
            ox + column as f32 * cell + gap * 0.5,
            oy + row as f32 * cell + gap * 0.5,
            cell - gap,
            cell - gap,
        ))
    }

    /// Tile under a screen position. Gaps count as the neighbouring tile, so
    /// a slow drag covers every tile it crosses. A fast drag is sampled once
    /// per frame and can jump over tiles.
    pub fn hit_test(&self, area: Rect, x: f32, y: f32) -> Option<usize> {
        let cell = self.cell_size(area);
        if cell <= 0.0 {
            return None;
        }
        let (ox, oy) = self.origin(area, cell);
        let fx = (x - ox) / cell;
        let fy = (y - oy) / cell;
        if fx < 0.0 || fy < 0.0 {
            return None;
        }
        self.index_of(fx as usize, fy as usize)
    }
}

/// Tile that receives paint this frame, if any.
///
/// A press paints the hovered tile; while held, paint lands once per newly
/// entered tile. Nothing is painted while a widget (slider, divider) owns
/// the drag.
fn paint_target(hovered: Option<usize>, entered: bool, is_click: bool, widget_drag: bool) -> Option<usize> {
    if widget_drag || !(is_click || entered) {
        return None;
    }
    hovered
}

/// Draw the grid and apply paint input
pub fn draw_grid_view(ctx: &mut UiContext, rect: Rect, state: &mut EditorState, storage: &mut PatternStorage, grid: &GridLayout) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::GRID_BG);

    let area = rect.pad(8.0);
    let hovered = if ctx.mouse.inside(&rect) {
        grid.hit_test(area, ctx.mouse.x, ctx.mouse.y)
    } else {
        None
    };
    state.hovered_tile = hovered;
    let entered = state.pointer.enter(hovered);

    if storage.current().is_none() {
        let msg = "No pattern - add one to start painting";
        draw_text(msg, rect.x + 10.0, rect.y + 24.0, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
        return;
    }

    let is_click = ctx.mouse.left_pressed;
    if let Some(index) = paint_target(hovered, entered, is_click, ctx.dragging.is_some()) {
        if let Err(e) = state.set_platform(storage, index, is_click) {
            tracing::warn!(tile = index, error = %e, "paint failed");
            state.set_status(&format!("Paint failed: {}", e), 3.0);
        }
    }

    for index in 0..grid.tile_count() {
        let Some(tile_rect) = grid.screen_rect(area, index) else {
            continue;
        };
        match storage.tile(index) {
            Some(tile) => draw_tile(tile_rect, tile),
            // Imported patterns may be shorter than the grid
            None => draw_rectangle_lines(tile_rect.x, tile_rect.y, tile_rect.w, tile_rect.h, 1.0, theme::WARNING_COLOR),
        }
        if hovered == Some(index) {
            draw_rectangle_lines(tile_rect.x - 1.0, tile_rect.y - 1.0, tile_rect.w + 2.0, tile_rect.h + 2.0, 2.0, theme::TILE_HOVER_OUTLINE);
        }
    }
}

fn draw_tile(rect: Rect, tile: &PlatformModel) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::platform_color(tile.platform_type));
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, theme::TILE_OUTLINE);

    if tile.platform_type == PlatformType::None || rect.w < 28.0 {
        return;
    }

    let font = (rect.h * 0.3).clamp(10.0, 20.0);
    draw_text(&tile.behaviour.to_string(), rect.x + 4.0, rect.y + font, font, WHITE);
    if rect.w >= 56.0 {
        let small = (font * 0.7).max(10.0);
        let detail = format!("{:.2}s {:.1}", tile.delay, tile.speed);
        draw_text(&detail, rect.x + 4.0, rect.bottom() - 4.0, small, Color::new(1.0, 1.0, 1.0, 0.8));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MouseState;

    #[test]
    fn test_index_mapping_row_major() {
        let grid = GridLayout::new(9, 9, 1.0);
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(8, 0), Some(8));
        assert_eq!(grid.index_of(0, 1), Some(9));
        assert_eq!(grid.index_of(9, 0), None);
        assert_eq!(grid.cell(80), Some((8, 8)));
        assert_eq!(grid.cell(81), None);

        for index in 0..grid.tile_count() {
            let (c, r) = grid.cell(index).unwrap();
            assert_eq!(grid.index_of(c, r), Some(index));
        }
    }

    #[test]
    fn test_non_square_grid() {
        let grid = GridLayout::new(4, 2, 1.0);
        assert_eq!(grid.tile_count(), 8);
        assert_eq!(grid.cell(5), Some((1, 1)));
    }

    #[test]
    fn test_world_position() {
        let grid = GridLayout::new(9, 9, 2.0);
        assert_eq!(grid.world_position(0), Some((0.0, 0.0)));
        assert_eq!(grid.world_position(10), Some((-2.0, 2.0)));
        assert_eq!(grid.world_position(81), None);
    }

    #[test]
    fn test_hit_test() {
        let grid = GridLayout::new(3, 3, 1.0);
        let area = Rect::new(0.0, 0.0, 300.0, 300.0);
        assert_eq!(grid.hit_test(area, 10.0, 10.0), Some(0));
        assert_eq!(grid.hit_test(area, 150.0, 150.0), Some(4));
        assert_eq!(grid.hit_test(area, 299.0, 10.0), Some(2));
        assert_eq!(grid.hit_test(area, 301.0, 10.0), None);
        assert_eq!(grid.hit_test(area, -1.0, 10.0), None);
    }

    #[test]
    fn test_paint_target_gate() {
        // Slider or divider drag in progress
        assert_eq!(paint_target(Some(4), true, false, true), None);
        assert_eq!(paint_target(Some(4), false, true, true), None);
        // Held on the same tile
        assert_eq!(paint_target(Some(4), false, false, false), None);
        // Click, or entering a new tile
        assert_eq!(paint_target(Some(4), false, true, false), Some(4));
        assert_eq!(paint_target(Some(5), true, false, false), Some(5));
        // Off the grid
        assert_eq!(paint_target(None, false, true, false), None);
    }

    #[test]
    fn test_drag_paints_each_entered_tile_once() {
        let mut storage = PatternStorage::seeded(9, 1);
        let mut state = EditorState::new();
        state.paint.platform_type = PlatformType::Item;
        state.begin_frame(0.0, &MouseState { left_down: true, ..Default::default() });

        let mut painted = Vec::new();
        for hovered in [Some(0), Some(0), Some(1), Some(1), Some(2)] {
            let entered = state.pointer.enter(hovered);
            if let Some(index) = paint_target(hovered, entered, false, false) {
                assert_eq!(state.set_platform(&mut storage, index, false), Ok(true));
                painted.push(index);
            }
        }
        assert_eq!(painted, vec![0, 1, 2]);

        let model = state.paint.to_model();
        let current = storage.current().unwrap();
        assert_eq!(&current.tiles()[..3], &[model; 3]);
        assert_eq!(current.tiles()[3], PlatformModel::default());
    }

    #[test]
    fn test_widget_drag_across_grid_paints_nothing() {
        let mut state = EditorState::new();
        state.begin_frame(0.0, &MouseState { left_down: true, ..Default::default() });

        for hovered in [Some(0), Some(1), Some(2)] {
            let entered = state.pointer.enter(hovered);
            assert!(entered);
            assert_eq!(paint_target(hovered, entered, false, true), None);
        }
    }

    #[test]
    fn test_hit_test_centered_in_wide_area() {
        let grid = GridLayout::new(2, 2, 1.0);
        // 100px cells centered horizontally: grid spans x 100..300
        let area = Rect::new(0.0, 0.0, 400.0, 200.0);
        assert_eq!(grid.hit_test(area, 50.0, 50.0), None);
        assert_eq!(grid.hit_test(area, 250.0, 150.0), Some(3));

        let tile = grid.screen_rect(area, 3).unwrap();
        assert!(tile.contains(250.0, 150.0));
    }
}
