//! Resizable panel system
//!
//! Panels can be split horizontally or vertically with draggable dividers.

use macroquad::prelude::*;
use super::{theme, Rect, UiContext};

/// Direction of a split
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitDir {
    Horizontal, // Left | Right
    Vertical,   // Top / Bottom
}

/// A split panel that divides space between two children
pub struct SplitPanel {
    pub id: u64,
    pub dir: SplitDir,
    pub ratio: f32,        // 0.0 - 1.0
    pub min_size: f32,     // Minimum size in pixels for each side
    pub divider_size: f32,
}

impl SplitPanel {
    pub fn new(id: u64, dir: SplitDir) -> Self {
        Self {
            id,
            dir,
            ratio: 0.5,
            min_size: 50.0,
            divider_size: 4.0,
        }
    }

    pub fn horizontal(id: u64) -> Self {
        Self::new(id, SplitDir::Horizontal)
    }

    pub fn vertical(id: u64) -> Self {
        Self::new(id, SplitDir::Vertical)
    }

    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    /// Handle divider dragging and draw it; returns the two child rects.
    ///
    /// Divider ids are offset so they never collide with per-frame widget ids.
    pub fn update(&mut self, ctx: &mut UiContext, bounds: Rect) -> (Rect, Rect) {
        let divider_rect = self.divider_rect(bounds);
        let drag_id = u64::MAX - self.id;

        if ctx.dragging.is_none() && ctx.mouse.inside(&divider_rect) {
            ctx.set_hot(drag_id);
            if ctx.mouse.left_pressed {
                ctx.start_drag(drag_id);
            }
        }

        if ctx.is_dragging(drag_id) {
            let (pos, origin, size) = match self.dir {
                SplitDir::Horizontal => (ctx.mouse.x, bounds.x, bounds.w),
                SplitDir::Vertical => (ctx.mouse.y, bounds.y, bounds.h),
            };
            if size > 0.0 {
                self.ratio = self.clamp_ratio((pos - origin) / size, size);
            }
        }

        let color = if ctx.is_hot(drag_id) || ctx.is_dragging(drag_id) {
            Color::from_rgba(100, 150, 255, 255)
        } else {
            Color::from_rgba(60, 60, 60, 255)
        };
        draw_rectangle(divider_rect.x, divider_rect.y, divider_rect.w, divider_rect.h, color);

        self.child_rects(bounds)
    }

    fn clamp_ratio(&self, ratio: f32, total_size: f32) -> f32 {
        let min_ratio = (self.min_size / total_size).min(0.5);
        ratio.clamp(min_ratio, 1.0 - min_ratio)
    }

    fn divider_rect(&self, bounds: Rect) -> Rect {
        match self.dir {
            SplitDir::Horizontal => {
                let x = bounds.x + bounds.w * self.ratio - self.divider_size * 0.5;
                Rect::new(x, bounds.y, self.divider_size, bounds.h)
            }
            SplitDir::Vertical => {
                let y = bounds.y + bounds.h * self.ratio - self.divider_size * 0.5;
                Rect::new(bounds.x, y, bounds.w, self.divider_size)
            }
        }
    }

    fn child_rects(&self, bounds: Rect) -> (Rect, Rect) {
        let half_div = self.divider_size * 0.5;
        match self.dir {
            SplitDir::Horizontal => {
                let split = bounds.w * self.ratio;
                (
                    Rect::new(bounds.x, bounds.y, split - half_div, bounds.h),
                    Rect::new(bounds.x + split + half_div, bounds.y, bounds.w - split - half_div, bounds.h),
                )
            }
            SplitDir::Vertical => {
                let split = bounds.h * self.ratio;
                (
                    Rect::new(bounds.x, bounds.y, bounds.w, split - half_div),
                    Rect::new(bounds.x, bounds.y + split + half_div, bounds.w, bounds.h - split - half_div),
                )
            }
        }
    }
}

/// Height of a panel title bar
pub const PANEL_TITLE_HEIGHT: f32 = 20.0;

/// Draw a panel background with optional title
pub fn draw_panel(rect: Rect, title: Option<&str>, bg_color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, bg_color);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, theme::BORDER_COLOR);

    if let Some(title) = title {
        draw_rectangle(rect.x, rect.y, rect.w, PANEL_TITLE_HEIGHT, theme::HEADER_COLOR);
        draw_text(title, rect.x + 5.0, rect.y + 14.0, theme::FONT_SIZE_HEADER, WHITE);
    }
}

/// Content area of a panel (after title bar)
pub fn panel_content_rect(rect: Rect, has_title: bool) -> Rect {
    if has_title {
        rect.remaining_after_top(PANEL_TITLE_HEIGHT).pad(2.0)
    } else {
        rect.pad(2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_rects_cover_bounds() {
        let split = SplitPanel::horizontal(1).with_ratio(0.25);
        let bounds = Rect::new(0.0, 0.0, 400.0, 300.0);
        let (left, right) = split.child_rects(bounds);
        assert!((left.w - 98.0).abs() < 0.001);
        assert!((right.x - 102.0).abs() < 0.001);
        assert!((right.right() - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_ratio_respects_min_size() {
        let split = SplitPanel::horizontal(1).with_min_size(100.0);
        assert!((split.clamp_ratio(0.01, 400.0) - 0.25).abs() < 0.001);
        assert!((split.clamp_ratio(0.99, 400.0) - 0.75).abs() < 0.001);
    }
}
