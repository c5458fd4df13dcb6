//! Drawing for the viewer frame.

use crate::ui_text::{HELP_LINES, control_lines, status_text};
use crate::viewer_layout::{FrameLayout, PanelRect};
use app::app_loop::{ViewerMode, ViewerState};
use cavegen::{RenderBlock, render_blocks};
use macroquad::prelude::*;

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const PANEL_PAD_X: f32 = 15.0;
const PANEL_PAD_Y: f32 = 25.0;
const LINE_STEP: f32 = 22.0;

pub fn draw_frame(viewer: &ViewerState, layout: &FrameLayout, ui_scale: f32) {
    for panel in [layout.status, layout.sidebar, layout.map] {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            scaled(BORDER_THICKNESS, ui_scale),
            BORDER_COLOR,
        );
    }
    draw_status_panel(viewer, layout.status, ui_scale);
    draw_sidebar(viewer, layout.sidebar, ui_scale);
    draw_map(viewer, layout.map);
}

fn draw_status_panel(viewer: &ViewerState, panel: PanelRect, ui_scale: f32) {
    let color = if matches!(viewer.mode, ViewerMode::Failed(_)) { RED } else { WHITE };
    draw_text(
        &status_text(viewer),
        panel.x + scaled(PANEL_PAD_X, ui_scale),
        panel.y + scaled(PANEL_PAD_Y, ui_scale),
        scaled(20.0, ui_scale),
        color,
    );
}

fn draw_sidebar(viewer: &ViewerState, panel: PanelRect, ui_scale: f32) {
    let text_x = panel.x + scaled(PANEL_PAD_X, ui_scale);
    let mut text_y = panel.y + scaled(PANEL_PAD_Y, ui_scale);

    draw_text("Parameters:", text_x, text_y, scaled(20.0, ui_scale), YELLOW);
    text_y += scaled(LINE_STEP, ui_scale);
    for line in control_lines(&viewer.config, viewer.selected) {
        let color = if line.starts_with('>') { WHITE } else { LIGHTGRAY };
        draw_text(&line, text_x, text_y, scaled(18.0, ui_scale), color);
        text_y += scaled(LINE_STEP, ui_scale);
    }

    text_y += scaled(LINE_STEP, ui_scale);
    for line in HELP_LINES {
        draw_text(line, text_x, text_y, scaled(16.0, ui_scale), GRAY);
        text_y += scaled(LINE_STEP * 0.8, ui_scale);
    }
}

fn draw_map(viewer: &ViewerState, panel: PanelRect) {
    let Some(grid) = viewer.grid() else {
        return;
    };
    for block in render_blocks(grid, viewer.config.tile_size, viewer.config.shade_regions) {
        if let Some((x, y, size)) = place_block(panel, &block) {
            let c = block.color;
            draw_rectangle(x, y, size, size, Color::from_rgba(c.r, c.g, c.b, c.a));
        }
    }
}

/// Screen position of a block inside `panel`. Transparent blocks and blocks that do not fit
/// entirely inside the panel are skipped.
fn place_block(panel: PanelRect, block: &RenderBlock) -> Option<(f32, f32, f32)> {
    if block.color.is_transparent() {
        return None;
    }
    let size = block.size as f32;
    let (x, y) = (block.x as f32, block.y as f32);
    if x + size > panel.width || y + size > panel.height {
        return None;
    }
    Some((panel.x + x, panel.y + y, size))
}

fn scaled(value: f32, ui_scale: f32) -> f32 {
    value * ui_scale
}
