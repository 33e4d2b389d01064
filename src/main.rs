//! Stepping Stone: platform pattern editor
//!
//! Paint grids of platforms (type, behavior, delay, speed), keep any number
//! of patterns, and exchange them with the level generator as JSON.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod editor;
mod files;
mod pattern;
mod ui;

use macroquad::prelude::*;
use app::AppState;
use config::EditorConfig;
use editor::draw_editor;
use ui::{draw_tooltip, theme, MouseState, UiContext};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Stepping Stone Editor v{}", VERSION),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stepstone_editor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[macroquad::main(window_conf)]
async fn main() {
    // Crash logging goes first
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    init_logging();

    tracing::info!(version = VERSION, "starting stepping stone editor");

    let config = EditorConfig::load_or_default();
    let mut app = AppState::new(config);
    let mut ui_ctx = UiContext::new();

    // Optional export file to open at startup
    #[cfg(not(target_arch = "wasm32"))]
    if let Some(path) = std::env::args_os().nth(1) {
        app.load_file(std::path::Path::new(&path));
    }

    loop {
        ui_ctx.begin_frame(MouseState::capture());
        app.begin_frame(get_time(), &ui_ctx);

        // Shortcuts are read before drawing so the frame shows their result
        for action in app.triggered_actions(&ui_ctx) {
            app.apply(action);
        }

        clear_background(theme::BG_COLOR);

        let action = draw_editor(
            &mut ui_ctx,
            &mut app.layout,
            &mut app.editor,
            &mut app.storage,
            &app.grid,
            &app.actions,
        );
        app.apply(action);

        draw_tooltip(&ui_ctx);

        next_frame().await;
    }
}
