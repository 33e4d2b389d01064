//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

use crate::pattern::PlatformType;

// =============================================================================
// Base UI Colors
// =============================================================================

pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Panel body
pub const PANEL_COLOR: Color = Color::new(0.137, 0.137, 0.157, 1.0); // ~35, 35, 40

/// Panel title bar / toolbar background
pub const HEADER_COLOR: Color = Color::new(0.196, 0.196, 0.235, 1.0); // ~50, 50, 60

pub const BORDER_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0); // ~80, 80, 80

pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Accent for active buttons and slider fills
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

pub const BUTTON_BG: Color = Color::new(0.196, 0.196, 0.216, 1.0);
pub const BUTTON_HOVER: Color = Color::new(0.235, 0.235, 0.275, 1.0);
pub const BUTTON_PRESSED: Color = Color::new(0.235, 0.314, 0.392, 1.0);

pub const WARNING_COLOR: Color = Color::new(0.95, 0.7, 0.3, 1.0);

// =============================================================================
// Font Sizes
// =============================================================================

pub const FONT_SIZE_HEADER: f32 = 16.0;
pub const FONT_SIZE_CONTENT: f32 = 14.0;
pub const FONT_SIZE_SMALL: f32 = 12.0;

// =============================================================================
// Grid Colors
// =============================================================================

pub const GRID_BG: Color = Color::new(0.078, 0.078, 0.098, 1.0); // ~20, 20, 25

pub const TILE_OUTLINE: Color = Color::new(0.25, 0.25, 0.3, 1.0);

pub const TILE_HOVER_OUTLINE: Color = Color::new(1.0, 1.0, 1.0, 0.9);

/// Fill color for a tile of the given type
pub fn platform_color(platform_type: PlatformType) -> Color {
    match platform_type {
        PlatformType::None => Color::new(0.22, 0.22, 0.26, 1.0),
        PlatformType::Drop => Color::new(0.85, 0.45, 0.2, 1.0),
        PlatformType::Item => Color::new(0.3, 0.75, 0.4, 1.0),
    }
}
