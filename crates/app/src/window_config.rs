//! Window configuration for the desktop viewer.

use app::APP_NAME;
use macroquad::window::{Conf, screen_dpi_scale};

const DEFAULT_WINDOW_WIDTH: i32 = 1200;
const DEFAULT_WINDOW_HEIGHT: i32 = 900;
const MIN_UI_SCALE: f32 = 1.0;
const MAX_UI_SCALE: f32 = 3.0;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Linux desktop sessions may not scale low-DPI framebuffers automatically.
        high_dpi: true,
        ..Default::default()
    }
}

/// Text and panel scale for the current display.
pub fn runtime_ui_scale() -> f32 {
    clamp_ui_scale(screen_dpi_scale())
}

fn clamp_ui_scale(dpi_scale: f32) -> f32 {
    if !dpi_scale.is_finite() {
        return MIN_UI_SCALE;
    }
    dpi_scale.clamp(MIN_UI_SCALE, MAX_UI_SCALE)
}

#[cfg(test)]
mod tests {
    use super::{build_window_conf, clamp_ui_scale};

    #[test]
    fn enables_high_dpi_rendering() {
        let conf = build_window_conf();
        assert!(conf.high_dpi);
        assert_eq!((conf.window_width, conf.window_height), (1200, 900));
    }

    #[test]
    fn ui_scale_ignores_bogus_dpi() {
        assert_eq!(clamp_ui_scale(f32::NAN), 1.0);
        assert_eq!(clamp_ui_scale(0.5), 1.0);
        assert_eq!(clamp_ui_scale(2.0), 2.0);
        assert_eq!(clamp_ui_scale(8.0), 3.0);
    }
}
