//! Sidebar form fields and the bounded steps they move by.

use cavegen::GenerationConfig;

pub const MAX_WALKER_COUNT: u32 = 100;
pub const MAX_WALKER_STEPS: u32 = 20_000;
pub const MAX_CLEAN_ITERATIONS: u32 = 20;
pub const MAX_MAP_SIZE: u32 = 400;
pub const MIN_TILE_SIZE: u32 = 1;
pub const MAX_TILE_SIZE: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Increase,
    Decrease,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlField {
    #[default]
    WalkerCount,
    WalkerSteps,
    CleanIterations,
    MapSize,
    TileSize,
    ShadeRegions,
}

impl ControlField {
    pub const ALL: [ControlField; 6] = [
        Self::WalkerCount,
        Self::WalkerSteps,
        Self::CleanIterations,
        Self::MapSize,
        Self::TileSize,
        Self::ShadeRegions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::WalkerCount => "Walkers",
            Self::WalkerSteps => "Steps",
            Self::CleanIterations => "Clean passes",
            Self::MapSize => "Map size",
            Self::TileSize => "Tile size",
            Self::ShadeRegions => "Shade regions",
        }
    }

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|field| *field == self).unwrap_or(0)
    }

    /// Whether a change to this field only needs a redraw.
    pub fn is_render_only(self) -> bool {
        matches!(self, Self::TileSize | Self::ShadeRegions)
    }

    pub fn value_text(self, config: &GenerationConfig) -> String {
        match self {
            Self::WalkerCount => config.walker_count.to_string(),
            Self::WalkerSteps => config.walker_steps.to_string(),
            Self::CleanIterations => config.clean_iterations.to_string(),
            Self::MapSize => config.map_size.to_string(),
            Self::TileSize => config.tile_size.to_string(),
            Self::ShadeRegions => if config.shade_regions { "on" } else { "off" }.to_string(),
        }
    }
}

/// `(min, max, step)` of a numeric field; `None` for toggles.
fn numeric_range(field: ControlField) -> Option<(u32, u32, u32)> {
    match field {
        ControlField::WalkerCount => Some((0, MAX_WALKER_COUNT, 1)),
        ControlField::WalkerSteps => Some((0, MAX_WALKER_STEPS, 100)),
        ControlField::CleanIterations => Some((0, MAX_CLEAN_ITERATIONS, 1)),
        ControlField::MapSize => Some((0, MAX_MAP_SIZE, 10)),
        ControlField::TileSize => Some((MIN_TILE_SIZE, MAX_TILE_SIZE, 1)),
        ControlField::ShadeRegions => None,
    }
}

fn numeric_value(config: &mut GenerationConfig, field: ControlField) -> Option<&mut u32> {
    match field {
        ControlField::WalkerCount => Some(&mut config.walker_count),
        ControlField::WalkerSteps => Some(&mut config.walker_steps),
        ControlField::CleanIterations => Some(&mut config.clean_iterations),
        ControlField::MapSize => Some(&mut config.map_size),
        ControlField::TileSize => Some(&mut config.tile_size),
        ControlField::ShadeRegions => None,
    }
}

/// Apply one step to `field`. Returns whether the value changed.
pub fn adjust_field(
    config: &mut GenerationConfig,
    field: ControlField,
    action: ControlAction,
) -> bool {
    let Some((min, max, step)) = numeric_range(field) else {
        config.shade_regions = !config.shade_regions;
        return true;
    };
    let Some(value) = numeric_value(config, field) else {
        return false;
    };
    let before = *value;
    *value = step_value(before, step, min, max, action);
    *value != before
}

/// Pull every field into the range the sidebar can reach. Seed and shading pass through.
pub fn clamp_config(mut config: GenerationConfig) -> GenerationConfig {
    for field in ControlField::ALL {
        if let (Some((min, max, _)), Some(value)) =
            (numeric_range(field), numeric_value(&mut config, field))
        {
            *value = (*value).clamp(min, max);
        }
    }
    config
}

fn step_value(current: u32, step: u32, min: u32, max: u32, action: ControlAction) -> u32 {
    let next = match action {
        ControlAction::Increase => current.saturating_add(step),
        ControlAction::Decrease => current.saturating_sub(step),
    };
    next.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_in_both_directions() {
        assert_eq!(ControlField::ShadeRegions.next(), ControlField::WalkerCount);
        assert_eq!(ControlField::WalkerCount.previous(), ControlField::ShadeRegions);
        assert_eq!(ControlField::MapSize.next(), ControlField::TileSize);
    }

    #[test]
    fn steps_respect_field_bounds() {
        let mut config = GenerationConfig { walker_count: 0, map_size: 395, ..Default::default() };
        assert!(!adjust_field(&mut config, ControlField::WalkerCount, ControlAction::Decrease));
        assert_eq!(config.walker_count, 0);

        assert!(adjust_field(&mut config, ControlField::MapSize, ControlAction::Increase));
        assert_eq!(config.map_size, MAX_MAP_SIZE);

        config.tile_size = MIN_TILE_SIZE;
        assert!(!adjust_field(&mut config, ControlField::TileSize, ControlAction::Decrease));
    }

    #[test]
    fn walker_steps_move_by_hundreds() {
        let mut config = GenerationConfig::default();
        adjust_field(&mut config, ControlField::WalkerSteps, ControlAction::Increase);
        assert_eq!(config.walker_steps, 1100);
    }

    #[test]
    fn shading_toggles_either_way() {
        let mut config = GenerationConfig::default();
        adjust_field(&mut config, ControlField::ShadeRegions, ControlAction::Decrease);
        assert!(config.shade_regions);
        assert_eq!(ControlField::ShadeRegions.value_text(&config), "on");
        adjust_field(&mut config, ControlField::ShadeRegions, ControlAction::Increase);
        assert!(!config.shade_regions);
    }

    #[test]
    fn only_render_fields_skip_regeneration() {
        let render_only: Vec<_> =
            ControlField::ALL.into_iter().filter(|field| field.is_render_only()).collect();
        assert_eq!(render_only, vec![ControlField::TileSize, ControlField::ShadeRegions]);
    }

    #[test]
    fn clamp_config_pulls_hand_edited_values_into_range() {
        let edited = GenerationConfig {
            seed: 77,
            walker_count: 5_000,
            walker_steps: u32::MAX,
            map_size: 1_000_000,
            tile_size: 0,
            shade_regions: true,
            ..GenerationConfig::default()
        };
        let clamped = clamp_config(edited);

        assert_eq!(clamped.walker_count, MAX_WALKER_COUNT);
        assert_eq!(clamped.walker_steps, MAX_WALKER_STEPS);
        assert_eq!(clamped.map_size, MAX_MAP_SIZE);
        assert_eq!(clamped.tile_size, MIN_TILE_SIZE);
        assert_eq!(clamped.clean_iterations, GenerationConfig::default().clean_iterations);
        assert_eq!(clamped.seed, 77);
        assert!(clamped.shade_regions);
    }

    #[test]
    fn clamp_config_keeps_in_range_values() {
        let config = GenerationConfig::default();
        assert_eq!(clamp_config(config.clone()), config);
    }
}
