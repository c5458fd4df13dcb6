mod frame_input;
mod ui_render;
mod ui_text;
mod viewer_layout;
mod window_config;

use std::env;

use app::app_loop::ViewerState;
use app::controls_file::ControlsFile;
use app::seed::{generate_runtime_seed, parse_viewer_args};
use cavegen::GenerationConfig;
use frame_input::capture_keys_pressed;
use log::{info, warn};
use macroquad::prelude::*;
use taffy::TaffyTree;
use viewer_layout::{compute_frame_layout, setup_layout};
use window_config::{build_window_conf, runtime_ui_scale};

fn initial_config(reset_controls: bool) -> GenerationConfig {
    if reset_controls {
        return GenerationConfig::default();
    }
    let Some(path) = ControlsFile::get_default_path() else {
        return GenerationConfig::default();
    };
    match ControlsFile::load(&path) {
        Ok(saved) => {
            info!("restored controls from {}", path.display());
            saved.into_config()
        }
        Err(err) => {
            if path.exists() {
                warn!("ignoring controls file {}: {err}", path.display());
            }
            GenerationConfig::default()
        }
    }
}

fn persist_config(config: &GenerationConfig) {
    let Some(path) = ControlsFile::get_default_path() else {
        return;
    };
    if let Err(err) = ControlsFile::new(config.clone()).write_atomic(&path) {
        warn!("failed to save controls to {}: {err}", path.display());
    }
}

#[macroquad::main(build_window_conf)]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let viewer_args = match parse_viewer_args(&args, generate_runtime_seed()) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{message}");
            return;
        }
    };

    let config = initial_config(viewer_args.reset_controls).with_seed(viewer_args.seed.value());
    info!("starting viewer with {:?}", viewer_args.seed);
    let mut viewer = ViewerState::new(config);
    viewer.regenerate();

    let ui_scale = runtime_ui_scale();
    let mut taffy = TaffyTree::new();
    let nodes = setup_layout(&mut taffy, ui_scale);

    loop {
        let keys_pressed = capture_keys_pressed();
        if !keys_pressed.is_empty() {
            viewer.tick(&keys_pressed, generate_runtime_seed());
            if viewer.config_changed {
                persist_config(&viewer.config);
            }
        }

        viewer.poll_generation();

        clear_background(BLACK);
        let layout = compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height());
        ui_render::draw_frame(&viewer, &layout, ui_scale);
        next_frame().await
    }
}
