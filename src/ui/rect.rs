//! Rectangle type for UI layout

/// A screen-space rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Half-open containment: right and bottom edges are outside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    pub fn slice_top(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, height.min(self.h))
    }

    pub fn remaining_after_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + h, self.w, self.h - h)
    }

    pub fn slice_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.bottom() - h, self.w, h)
    }

    pub fn remaining_after_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y, self.w, self.h - h)
    }

    /// Split into `count` equal columns separated by `gap`
    pub fn columns(&self, count: usize, gap: f32) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let total_gap = gap * (count - 1) as f32;
        let w = ((self.w - total_gap) / count as f32).max(0.0);
        (0..count)
            .map(|i| Rect::new(self.x + i as f32 * (w + gap), self.y, w, self.h))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(110.0, 40.0));
    }

    #[test]
    fn test_columns() {
        let cols = Rect::new(0.0, 0.0, 100.0, 20.0).columns(3, 5.0);
        assert_eq!(cols.len(), 3);
        assert!((cols[0].w - 30.0).abs() < 0.001);
        assert!((cols[2].x - 70.0).abs() < 0.001);
        assert!((cols[2].right() - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_slices() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(r.slice_top(20.0), Rect::new(0.0, 0.0, 200.0, 20.0));
        assert_eq!(r.remaining_after_top(20.0), Rect::new(0.0, 20.0, 200.0, 80.0));
        assert_eq!(r.slice_bottom(30.0), Rect::new(0.0, 70.0, 200.0, 30.0));
    }
}
