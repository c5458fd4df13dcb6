//! Text for the status line and controls sidebar.

use app::app_loop::{ViewerMode, ViewerState};
use app::controls::ControlField;
use app::format_seed;
use cavegen::{GenerationConfig, GenerationStats};

pub const HELP_LINES: [&str; 5] = [
    "Up/Down  select",
    "Left/Right  adjust",
    "S  shade regions",
    "Enter  regenerate",
    "R  new seed",
];

pub fn status_text(viewer: &ViewerState) -> String {
    let seed = format_seed(viewer.config.seed);
    match &viewer.mode {
        ViewerMode::Empty => format!("Seed {seed}: press Enter to generate"),
        ViewerMode::Generating => format!("Seed {seed}: generating..."),
        ViewerMode::Failed(err) => format!("Seed {seed}: generation failed: {err}"),
        ViewerMode::Ready(grid) => {
            let mut text = format!(
                "Seed {seed} {} {}",
                grid.fingerprint_hex(),
                GenerationStats::from_grid(grid)
            );
            if viewer.stale {
                text.push_str(" [Enter to apply changes]");
            }
            text
        }
    }
}

/// One line per form field, with a marker on the selected one.
pub fn control_lines(config: &GenerationConfig, selected: ControlField) -> Vec<String> {
    ControlField::ALL
        .into_iter()
        .map(|field| {
            let marker = if field == selected { '>' } else { ' ' };
            format!("{marker} {}: {}", field.label(), field.value_text(config))
        })
        .collect()
}
