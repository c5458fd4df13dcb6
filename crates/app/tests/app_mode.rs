use std::mem;

use app::app_loop::{ViewerMode, ViewerState};
use app::controls::ControlField;
use cavegen::{GenerationConfig, TileState};
use macroquad::prelude::KeyCode;

fn default_config(seed: u64) -> GenerationConfig {
    GenerationConfig::default().with_seed(seed)
}

#[test]
fn test_enter_regenerates_the_same_map() {
    let mut viewer = ViewerState::new(default_config(3));
    viewer.tick(&[KeyCode::Enter], 0);
    viewer.wait_for_generation();
    assert!(matches!(viewer.mode, ViewerMode::Ready(_)), "seed 3 finishes");
    let first = mem::take(&mut viewer.mode);

    viewer.tick(&[KeyCode::Enter], 0);
    viewer.wait_for_generation();
    assert_eq!(viewer.mode, first, "same seed and parameters must rebuild the same map");
}

#[test]
fn test_navigation_selects_and_adjusts_fields() {
    let mut viewer = ViewerState::new(GenerationConfig { map_size: 40, ..default_config(1) });
    assert_eq!(viewer.selected, ControlField::WalkerCount);

    viewer.tick(&[KeyCode::Down], 0);
    viewer.tick(&[KeyCode::Down], 0);
    viewer.tick(&[KeyCode::Down], 0);
    assert_eq!(viewer.selected, ControlField::MapSize);

    viewer.tick(&[KeyCode::Left], 0);
    assert_eq!(viewer.config.map_size, 30);
    assert!(viewer.config_changed);
    assert_eq!(viewer.mode, ViewerMode::Empty, "edits alone never generate");
    assert!(!viewer.is_generating());

    viewer.tick(&[KeyCode::Up], 0);
    assert_eq!(viewer.selected, ControlField::CleanIterations);
    assert!(!viewer.config_changed);
}

#[test]
fn test_shading_toggle_keeps_the_grid() {
    let mut viewer = ViewerState::new(default_config(4));
    viewer.regenerate();
    viewer.wait_for_generation();
    let before = viewer.grid().map(|grid| grid.fingerprint());
    assert!(before.is_some(), "seed 4 finishes");

    viewer.tick(&[KeyCode::S], 0);
    viewer.tick(&[KeyCode::S], 0);
    assert!(!viewer.is_generating());
    assert_eq!(viewer.grid().map(|grid| grid.fingerprint()), before);
    assert!(!viewer.config.shade_regions);
}

#[test]
fn test_new_seed_key_rebuilds_with_the_supplied_seed() {
    let mut viewer = ViewerState::new(default_config(5));
    viewer.tick(&[KeyCode::R], 6);
    assert_eq!(viewer.config.seed, 6);
    viewer.wait_for_generation();

    let grid = viewer.grid().expect("seed 6 finishes");
    assert!(grid.count_state(TileState::Floor) > 0);
}
