//! Editor state: paint settings, pointer tracking and status line

use crate::pattern::{PatternError, PatternStorage, PlatformModel, PlatformType, TileUpdate, BEHAVIOUR_MAX, DELAY_MAX, SPEED_MAX};
use crate::ui::{MouseState, SliderRange};

/// Slider ranges for the control panel fields
pub const BEHAVIOUR_RANGE: SliderRange = SliderRange::new(0.0, BEHAVIOUR_MAX as f32, 1.0);
pub const DELAY_RANGE: SliderRange = SliderRange::new(0.0, DELAY_MAX, 0.05);
pub const SPEED_RANGE: SliderRange = SliderRange::new(0.0, SPEED_MAX, 0.5);

/// Values written into a tile when it is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintSettings {
    pub platform_type: PlatformType,
    pub behaviour: u8,
    pub delay: f32,
    pub speed: f32,
}

impl Default for PaintSettings {
    fn default() -> Self {
        Self {
            platform_type: PlatformType::Drop,
            behaviour: 0,
            delay: 0.0,
            speed: 10.0,
        }
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

impl PaintSettings {
    /// Tile model for these settings: clamped to range, delay and speed at 2 decimals
    pub fn to_model(&self) -> PlatformModel {
        PlatformModel {
            platform_type: self.platform_type,
            behaviour: self.behaviour.min(BEHAVIOUR_MAX),
            delay: round2(self.delay.clamp(0.0, DELAY_MAX)),
            speed: round2(self.speed.clamp(0.0, SPEED_MAX)),
        }
    }
}

/// Mouse button state as seen by the grid
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Left button held anywhere in the window
    pub button_held: bool,
    /// Tile under the pointer last frame
    pub last_tile: Option<usize>,
}

impl PointerState {
    pub fn update(&mut self, mouse: &MouseState) {
        self.button_held = mouse.left_down;
    }

    /// Record the tile under the pointer; true when it differs from last frame
    pub fn enter(&mut self, tile: Option<usize>) -> bool {
        let entered = tile.is_some() && tile != self.last_tile;
        self.last_tile = tile;
        entered
    }
}

#[derive(Debug, Default)]
pub struct EditorState {
    pub paint: PaintSettings,
    pub pointer: PointerState,
    /// Tile under the mouse this frame
    pub hovered_tile: Option<usize>,
    /// Frame timestamp (seconds)
    now: f64,
    status_message: Option<(String, f64)>,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of frame bookkeeping
    pub fn begin_frame(&mut self, now: f64, mouse: &MouseState) {
        self.now = now;
        self.pointer.update(mouse);
    }

    /// Show a status message for a duration
    pub fn set_status(&mut self, message: &str, duration_secs: f64) {
        self.status_message = Some((message.to_string(), self.now + duration_secs));
    }

    /// Current status message if not expired
    pub fn get_status(&self) -> Option<&str> {
        match &self.status_message {
            Some((msg, expiry)) if self.now < *expiry => Some(msg),
            _ => None,
        }
    }

    /// Paint tile `index` of the current pattern.
    ///
    /// Only acts when the button is held (drag) or on a direct click.
    /// Returns whether the tile was written.
    pub fn set_platform(&self, storage: &mut PatternStorage, index: usize, is_click: bool) -> Result<bool, PatternError> {
        if !self.pointer.button_held && !is_click {
            return Ok(false);
        }
        storage.set(TileUpdate::new(index, self.paint.to_model()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(down: bool) -> MouseState {
        MouseState { left_down: down, ..Default::default() }
    }

    #[test]
    fn test_to_model_rounds_and_clamps() {
        let settings = PaintSettings {
            platform_type: PlatformType::Item,
            behaviour: 14,
            delay: 1.23456,
            speed: 250.0,
        };
        let model = settings.to_model();
        assert_eq!(model.platform_type, PlatformType::Item);
        assert_eq!(model.behaviour, 10);
        assert!((model.delay - 1.23).abs() < 1e-6);
        assert_eq!(model.speed, 100.0);
    }

    #[test]
    fn test_default_settings() {
        let model = PaintSettings::default().to_model();
        assert_eq!(model, PlatformModel::new(PlatformType::Drop, 0, 0.0, 10.0));
    }

    #[test]
    fn test_hover_without_button_does_not_paint() {
        let mut storage = PatternStorage::seeded(9, 1);
        let mut state = EditorState::new();
        state.begin_frame(0.0, &held(false));

        assert_eq!(state.set_platform(&mut storage, 3, false), Ok(false));
        assert_eq!(storage.tile(3), Some(&PlatformModel::default()));
    }

    #[test]
    fn test_click_paints_without_held_button() {
        let mut storage = PatternStorage::seeded(9, 1);
        let mut state = EditorState::new();
        state.begin_frame(0.0, &held(false));

        assert_eq!(state.set_platform(&mut storage, 3, true), Ok(true));
        assert_eq!(storage.tile(3), Some(&PaintSettings::default().to_model()));
    }

    #[test]
    fn test_pointer_enter_only_on_change() {
        let mut pointer = PointerState::default();
        assert!(pointer.enter(Some(4)));
        assert!(!pointer.enter(Some(4)));
        assert!(!pointer.enter(None));
        assert!(pointer.enter(Some(4)));
    }

    #[test]
    fn test_paint_on_empty_storage_fails() {
        let mut storage = PatternStorage::new(9);
        let mut state = EditorState::new();
        state.begin_frame(0.0, &held(true));
        assert_eq!(state.set_platform(&mut storage, 0, true), Err(PatternError::Empty));
    }

    #[test]
    fn test_status_expires() {
        let mut state = EditorState::new();
        state.begin_frame(10.0, &held(false));
        state.set_status("Exported", 3.0);
        assert_eq!(state.get_status(), Some("Exported"));

        state.begin_frame(13.5, &held(false));
        assert_eq!(state.get_status(), None);
    }
}
