//! Per-frame mouse state and widget interaction tracking

use super::Rect;

/// Mouse state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    pub left_pressed: bool, // Just pressed this frame
}

impl MouseState {
    /// Sample macroquad's input state
    pub fn capture() -> Self {
        use macroquad::prelude::{is_mouse_button_down, is_mouse_button_pressed, mouse_position, MouseButton};
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
        }
    }

    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
#[derive(Debug, Default)]
pub struct UiContext {
    pub mouse: MouseState,
    /// Widget currently owning a drag
    pub dragging: Option<u64>,
    /// Widget under the mouse
    pub hot: Option<u64>,
    /// Tooltip requested this frame (text, x, y)
    pub tooltip: Option<(String, f32, f32)>,
    id_counter: u64,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.hot = None;
        self.tooltip = None;
        self.id_counter = 0;

        if !self.mouse.left_down {
            self.dragging = None;
        }
    }

    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }

    pub fn start_drag(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    pub fn set_hot(&mut self, id: u64) {
        if self.dragging.is_none() || self.dragging == Some(id) {
            self.hot = Some(id);
        }
    }

    pub fn is_hot(&self, id: u64) -> bool {
        self.hot == Some(id)
    }

    pub fn set_tooltip(&mut self, text: &str, x: f32, y: f32) {
        self.tooltip = Some((text.to_string(), x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_at(x: f32, y: f32, left_down: bool) -> MouseState {
        MouseState { x, y, left_down, ..Default::default() }
    }

    #[test]
    fn test_drag_cleared_on_release() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse_at(0.0, 0.0, true));
        let id = ctx.next_id();
        ctx.start_drag(id);

        ctx.begin_frame(mouse_at(5.0, 0.0, true));
        assert!(ctx.is_dragging(id));

        ctx.begin_frame(mouse_at(5.0, 0.0, false));
        assert!(ctx.dragging.is_none());
    }

    #[test]
    fn test_hot_blocked_by_other_drag() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(mouse_at(0.0, 0.0, true));
        let a = ctx.next_id();
        let b = ctx.next_id();
        ctx.start_drag(a);
        ctx.set_hot(b);
        assert!(!ctx.is_hot(b));
        ctx.set_hot(a);
        assert!(ctx.is_hot(a));
    }
}
