//! Basic UI widgets
//!
//! Text buttons, an option row and a stepped slider. Each widget draws itself
//! and reports interaction through its return value.

use macroquad::prelude::*;
use super::{theme, Rect, UiContext};

/// Horizontal layout helper for rows of buttons and labels
pub struct Toolbar {
    rect: Rect,
    cursor_x: f32,
    spacing: f32,
}

impl Toolbar {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cursor_x: rect.x + 4.0,
            spacing: 4.0,
        }
    }

    pub fn separator(&mut self) {
        self.cursor_x += self.spacing * 2.0;
        draw_line(
            self.cursor_x,
            self.rect.y + 4.0,
            self.cursor_x,
            self.rect.bottom() - 4.0,
            1.0,
            theme::BORDER_COLOR,
        );
        self.cursor_x += self.spacing * 2.0;
    }

    pub fn label(&mut self, text: &str) {
        let dims = measure_text(text, None, theme::FONT_SIZE_CONTENT as u16, 1.0);
        let text_y = (self.rect.y + (self.rect.h + dims.height) * 0.5).round();
        draw_text(text, self.cursor_x.round(), text_y, theme::FONT_SIZE_CONTENT, theme::TEXT_COLOR);
        self.cursor_x += dims.width + self.spacing;
    }

    pub fn button(&mut self, ctx: &mut UiContext, text: &str, width: f32, tooltip: &str, state: ButtonState) -> bool {
        let btn_rect = Rect::new(self.cursor_x.round(), (self.rect.y + 2.0).round(), width, self.rect.h - 4.0);
        self.cursor_x += width + self.spacing;
        text_button(ctx, btn_rect, text, tooltip, state)
    }
}

/// Visual state of a text button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    /// Highlighted, still clickable
    Active,
    /// Greyed out, never reports a click
    Disabled,
}

/// Draw a text button, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, text: &str, tooltip: &str, state: ButtonState) -> bool {
    let id = ctx.next_id();
    let enabled = state != ButtonState::Disabled;
    let hovered = enabled && ctx.dragging.is_none() && ctx.mouse.inside(&rect);

    if hovered {
        ctx.set_hot(id);
        if !tooltip.is_empty() {
            ctx.set_tooltip(tooltip, ctx.mouse.x, ctx.mouse.y);
        }
    }

    let bg = match state {
        ButtonState::Active => theme::ACCENT_COLOR,
        _ if hovered && ctx.mouse.left_down => theme::BUTTON_PRESSED,
        _ if hovered => theme::BUTTON_HOVER,
        _ => theme::BUTTON_BG,
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, theme::BORDER_COLOR);

    let color = match state {
        ButtonState::Disabled => theme::TEXT_DIM,
        ButtonState::Active => WHITE,
        ButtonState::Normal => theme::TEXT_COLOR,
    };
    draw_text_centered(text, &rect, theme::FONT_SIZE_CONTENT, color);

    hovered && ctx.mouse.left_pressed
}

/// Row of mutually exclusive options. Returns the newly chosen index.
pub fn option_row(ctx: &mut UiContext, rect: Rect, labels: &[&str], selected: usize) -> Option<usize> {
    let mut chosen = None;
    for (i, (label, cell)) in labels.iter().zip(rect.columns(labels.len(), 2.0)).enumerate() {
        let state = if i == selected { ButtonState::Active } else { ButtonState::Normal };
        if text_button(ctx, cell, label, "", state) && i != selected {
            chosen = Some(i);
        }
    }
    chosen
}

/// Range and granularity of a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Snap to the nearest step and clamp into range
    pub fn snap(&self, value: f32) -> f32 {
        let stepped = if self.step > 0.0 {
            self.min + ((value - self.min) / self.step).round() * self.step
        } else {
            value
        };
        stepped.clamp(self.min, self.max)
    }

    /// Value at normalized position `t` (0.0 - 1.0)
    pub fn value_at(&self, t: f32) -> f32 {
        self.snap(self.min + t.clamp(0.0, 1.0) * (self.max - self.min))
    }

    pub fn fraction(&self, value: f32) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Labelled horizontal slider. Returns the new value while it changes.
pub fn slider(ctx: &mut UiContext, rect: Rect, label: &str, value: f32, range: SliderRange, decimals: usize) -> Option<f32> {
    let id = ctx.next_id();
    let label_w = (rect.w * 0.3).min(80.0);
    let track = Rect::new(rect.x + label_w, rect.y + 2.0, rect.w - label_w, rect.h - 4.0);

    draw_text(label, rect.x, rect.y + rect.h * 0.5 + 5.0, theme::FONT_SIZE_CONTENT, theme::TEXT_COLOR);

    if ctx.dragging.is_none() && ctx.mouse.inside(&track) {
        ctx.set_hot(id);
        if ctx.mouse.left_pressed {
            ctx.start_drag(id);
        }
    }

    let mut changed = None;
    if ctx.is_dragging(id) && track.w > 0.0 {
        let new_value = range.value_at((ctx.mouse.x - track.x) / track.w);
        if new_value != value {
            changed = Some(new_value);
        }
    }

    let shown = changed.unwrap_or(value);
    let fill_w = track.w * range.fraction(shown);
    let bg = if ctx.is_hot(id) || ctx.is_dragging(id) { theme::BUTTON_HOVER } else { theme::BUTTON_BG };
    draw_rectangle(track.x, track.y, track.w, track.h, bg);
    draw_rectangle(track.x, track.y, fill_w, track.h, Color::new(0.0, 0.45, 0.55, 1.0));
    draw_rectangle_lines(track.x, track.y, track.w, track.h, 1.0, theme::BORDER_COLOR);
    draw_text_centered(&format!("{:.*}", decimals, shown), &track, theme::FONT_SIZE_CONTENT, WHITE);

    changed
}

/// Draw text centered in a rect
pub fn draw_text_centered(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let (cx, cy) = rect.center();
    draw_text(text, (cx - dims.width * 0.5).round(), (cy + dims.offset_y * 0.5).round(), font_size, color);
}

/// Draw the tooltip requested this frame, if any
pub fn draw_tooltip(ctx: &UiContext) {
    let Some((text, x, y)) = &ctx.tooltip else {
        return;
    };
    let dims = measure_text(text, None, theme::FONT_SIZE_SMALL as u16, 1.0);
    let w = dims.width + 10.0;
    let h = 20.0;
    let tx = (x + 12.0).min(screen_width() - w);
    let ty = (y + 16.0).min(screen_height() - h);
    draw_rectangle(tx, ty, w, h, Color::from_rgba(30, 30, 35, 240));
    draw_rectangle_lines(tx, ty, w, h, 1.0, theme::BORDER_COLOR);
    draw_text(text, tx + 5.0, ty + 14.0, theme::FONT_SIZE_SMALL, theme::TEXT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_step() {
        let delay = SliderRange::new(0.0, 10.0, 0.05);
        assert!((delay.snap(1.234) - 1.25).abs() < 1e-4);
        assert_eq!(delay.snap(-3.0), 0.0);
        assert_eq!(delay.snap(42.0), 10.0);

        let speed = SliderRange::new(0.0, 100.0, 0.5);
        assert!((speed.snap(10.3) - 10.5).abs() < 1e-4);
    }

    #[test]
    fn test_value_at_ends() {
        let behaviour = SliderRange::new(0.0, 10.0, 1.0);
        assert_eq!(behaviour.value_at(0.0), 0.0);
        assert_eq!(behaviour.value_at(1.0), 10.0);
        assert_eq!(behaviour.value_at(0.44), 4.0);
        assert_eq!(behaviour.value_at(2.0), 10.0);
    }

    #[test]
    fn test_fraction() {
        let speed = SliderRange::new(0.0, 100.0, 0.5);
        assert!((speed.fraction(25.0) - 0.25).abs() < 1e-6);
        assert_eq!(SliderRange::new(1.0, 1.0, 0.0).fraction(1.0), 0.0);
    }
}
