//! Editor layout - grid on the left, paint controls and pattern list on the right

use macroquad::prelude::*;
use crate::pattern::{PatternStorage, PlatformType};
use crate::ui::{
    draw_panel, option_row, panel_content_rect, slider, text_button, theme, ActionContext, ActionRegistry,
    ButtonState, Rect, SplitPanel, Toolbar, UiContext,
};
use super::actions::{action_for_id, build_context};
use super::grid_view::{draw_grid_view, GridLayout};
use super::{EditorState, BEHAVIOUR_RANGE, DELAY_RANGE, SPEED_RANGE};

const TOOLBAR_HEIGHT: f32 = 30.0;
const STATUS_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 24.0;

/// Actions that can be triggered by the editor UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    None,
    AddPattern,
    RemovePattern,
    NextPattern,
    PreviousPattern,
    SelectPattern(usize),
    SetPlatformType(PlatformType),
    Generate,
    Export,
    Import,
}

/// Editor layout state (split panel ratios)
pub struct EditorLayout {
    /// Grid | side panels
    pub main_split: SplitPanel,
    /// Paint controls / pattern list
    pub side_split: SplitPanel,
}

impl EditorLayout {
    pub fn new() -> Self {
        Self {
            main_split: SplitPanel::horizontal(1).with_ratio(0.68).with_min_size(220.0),
            side_split: SplitPanel::vertical(2).with_ratio(0.5).with_min_size(120.0),
        }
    }
}

impl Default for EditorLayout {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the complete editor UI, returns action if triggered
pub fn draw_editor(
    ctx: &mut UiContext,
    layout: &mut EditorLayout,
    state: &mut EditorState,
    storage: &mut PatternStorage,
    grid: &GridLayout,
    registry: &ActionRegistry,
) -> EditorAction {
    let screen = Rect::screen(screen_width(), screen_height());

    let toolbar_rect = screen.slice_top(TOOLBAR_HEIGHT);
    let main_rect = screen.remaining_after_top(TOOLBAR_HEIGHT);
    let status_rect = main_rect.slice_bottom(STATUS_HEIGHT);
    let panels_rect = main_rect.remaining_after_bottom(STATUS_HEIGHT);

    let action_ctx = build_context(storage.len(), false);
    let mut action = draw_toolbar(ctx, toolbar_rect, storage, registry, &action_ctx);

    let (grid_rect, side_rect) = layout.main_split.update(ctx, panels_rect);
    let (controls_rect, list_rect) = layout.side_split.update(ctx, side_rect);

    draw_panel(grid_rect, Some("Pattern"), theme::PANEL_COLOR);
    draw_grid_view(ctx, panel_content_rect(grid_rect, true), state, storage, grid);

    draw_panel(controls_rect, Some("Paint"), theme::PANEL_COLOR);
    if let Some(a) = draw_paint_controls(ctx, panel_content_rect(controls_rect, true), state) {
        action = a;
    }

    let title = format!("Patterns ({})", storage.len());
    draw_panel(list_rect, Some(&title), theme::PANEL_COLOR);
    if let Some(a) = draw_pattern_list(ctx, panel_content_rect(list_rect, true), storage) {
        action = a;
    }

    draw_status_bar(status_rect, state, storage, grid);

    action
}

fn action_button(
    toolbar: &mut Toolbar,
    ctx: &mut UiContext,
    registry: &ActionRegistry,
    action_ctx: &ActionContext,
    id: &str,
    width: f32,
) -> bool {
    let Some(action) = registry.get(id) else {
        return false;
    };
    let state = if registry.is_enabled(id, action_ctx) { ButtonState::Normal } else { ButtonState::Disabled };
    toolbar.button(ctx, action.label, width, &action.tooltip(), state)
}

fn draw_toolbar(
    ctx: &mut UiContext,
    rect: Rect,
    storage: &PatternStorage,
    registry: &ActionRegistry,
    action_ctx: &ActionContext,
) -> EditorAction {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);

    let mut action = EditorAction::None;
    let mut toolbar = Toolbar::new(rect);

    if action_button(&mut toolbar, ctx, registry, action_ctx, "pattern.previous", 70.0) {
        action = EditorAction::PreviousPattern;
    }
    if storage.is_empty() {
        toolbar.label("No patterns");
    } else {
        toolbar.label(&format!("Pattern {}/{}", storage.index() + 1, storage.len()));
    }
    if action_button(&mut toolbar, ctx, registry, action_ctx, "pattern.next", 50.0) {
        action = EditorAction::NextPattern;
    }
    if action_button(&mut toolbar, ctx, registry, action_ctx, "pattern.add", 50.0) {
        action = EditorAction::AddPattern;
    }
    if action_button(&mut toolbar, ctx, registry, action_ctx, "pattern.remove", 64.0) {
        action = EditorAction::RemovePattern;
    }

    toolbar.separator();

    for data in registry.actions_in_category("Data") {
        if action_button(&mut toolbar, ctx, registry, action_ctx, data.id, 72.0) {
            action = action_for_id(data.id).unwrap_or(action);
        }
    }

    action
}

fn draw_paint_controls(ctx: &mut UiContext, rect: Rect, state: &mut EditorState) -> Option<EditorAction> {
    let mut action = None;
    let mut y = rect.y;

    draw_text("Type", rect.x, y + 14.0, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
    y += 18.0;
    let labels = PlatformType::ALL.map(|t| t.label());
    let row = Rect::new(rect.x, y, rect.w, ROW_HEIGHT);
    if let Some(i) = option_row(ctx, row, &labels, state.paint.platform_type.index()) {
        action = PlatformType::from_index(i).map(EditorAction::SetPlatformType);
    }
    y += ROW_HEIGHT + 10.0;

    let behaviour = state.paint.behaviour as f32;
    if let Some(v) = slider(ctx, Rect::new(rect.x, y, rect.w, ROW_HEIGHT), "Behavior", behaviour, BEHAVIOUR_RANGE, 0) {
        state.paint.behaviour = v.round() as u8;
    }
    y += ROW_HEIGHT + 6.0;

    if let Some(v) = slider(ctx, Rect::new(rect.x, y, rect.w, ROW_HEIGHT), "Delay", state.paint.delay, DELAY_RANGE, 2) {
        state.paint.delay = v;
    }
    y += ROW_HEIGHT + 6.0;

    if let Some(v) = slider(ctx, Rect::new(rect.x, y, rect.w, ROW_HEIGHT), "Speed", state.paint.speed, SPEED_RANGE, 1) {
        state.paint.speed = v;
    }
    y += ROW_HEIGHT + 12.0;

    if y + 14.0 < rect.bottom() {
        draw_text("Click or drag on the grid to paint", rect.x, y + 12.0, theme::FONT_SIZE_SMALL, theme::TEXT_DIM);
    }

    action
}

/// First visible row so the selected pattern stays in view
fn list_scroll(selected: usize, visible: usize) -> usize {
    if visible == 0 || selected < visible {
        0
    } else {
        selected + 1 - visible
    }
}

fn draw_pattern_list(ctx: &mut UiContext, rect: Rect, storage: &PatternStorage) -> Option<EditorAction> {
    if storage.is_empty() {
        draw_text("No patterns", rect.x, rect.y + 14.0, theme::FONT_SIZE_CONTENT, theme::TEXT_DIM);
        return None;
    }

    let visible = (rect.h / ROW_HEIGHT).floor().max(0.0) as usize;
    let first = list_scroll(storage.index(), visible);
    let mut action = None;

    for (index, pattern) in storage.all().iter().enumerate().skip(first).take(visible) {
        let offset = (index - first) as f32;
        let row = Rect::new(rect.x, rect.y + offset * ROW_HEIGHT, rect.w, ROW_HEIGHT - 2.0);
        let current = index == storage.index();
        let state = if current { ButtonState::Active } else { ButtonState::Normal };
        let label = format!("pattern_{}  ({} set)", index, pattern.occupied());
        if text_button(ctx, row, &label, "", state) && !current {
            action = Some(EditorAction::SelectPattern(index));
        }
    }

    action
}

fn draw_status_bar(rect: Rect, state: &EditorState, storage: &PatternStorage, grid: &GridLayout) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::HEADER_COLOR);

    if let Some(msg) = state.get_status() {
        draw_text(msg, rect.x + 8.0, rect.y + 15.0, theme::FONT_SIZE_CONTENT, theme::ACCENT_COLOR);
        return;
    }

    let status = match state.hovered_tile {
        Some(index) => {
            let (column, row) = grid.cell(index).unwrap_or_default();
            let (x, z) = grid.world_position(index).unwrap_or_default();
            match storage.tile(index) {
                Some(tile) => format!(
                    "Tile {} ({}, {}) at x {:.1} z {:.1} | {} | behavior {} | delay {:.2} | speed {:.1}",
                    index, column, row, x, z, tile.platform_type.label(), tile.behaviour, tile.delay, tile.speed
                ),
                None => format!("Tile {} ({}, {}) | missing from pattern", index, column, row),
            }
        }
        None => format!(
            "Painting {} | behavior {} | delay {:.2} | speed {:.1}",
            state.paint.platform_type.label(), state.paint.behaviour, state.paint.delay, state.paint.speed
        ),
    };
    draw_text(&status, rect.x + 8.0, rect.y + 15.0, theme::FONT_SIZE_CONTENT, theme::TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_scroll_keeps_selection_visible() {
        assert_eq!(list_scroll(0, 5), 0);
        assert_eq!(list_scroll(4, 5), 0);
        assert_eq!(list_scroll(5, 5), 1);
        assert_eq!(list_scroll(12, 5), 8);
        assert_eq!(list_scroll(3, 0), 0);
    }
}
