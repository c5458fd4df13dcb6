use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use cavegen::{GenerationConfig, GenerationError, Grid, MapGenerator};
use log::{info, warn};
use macroquad::prelude::KeyCode;

use crate::controls::{ControlAction, ControlField, adjust_field};

#[derive(Debug, PartialEq, Default)]
pub enum ViewerMode {
    #[default]
    Empty,
    /// A background run is in flight; nothing is drawn until it lands.
    Generating,
    Ready(Grid),
    Failed(GenerationError),
}

#[derive(Default)]
pub struct ViewerState {
    pub mode: ViewerMode,
    pub config: GenerationConfig,
    pub selected: ControlField,
    /// Generation inputs changed since the map on screen was built.
    pub stale: bool,
    /// Set when this frame's `tick()` changed `config`; the caller persists it.
    pub config_changed: bool,
    pending: Option<Receiver<Result<Grid, GenerationError>>>,
}

impl ViewerState {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Process the keys pressed this frame. `fresh_seed` is used only when a new seed is
    /// requested.
    pub fn tick(&mut self, keys_pressed: &[KeyCode], fresh_seed: u64) {
        self.config_changed = false;

        if keys_pressed.contains(&KeyCode::Up) {
            self.selected = self.selected.previous();
        }
        if keys_pressed.contains(&KeyCode::Down) {
            self.selected = self.selected.next();
        }
        if keys_pressed.contains(&KeyCode::Left) {
            self.adjust(self.selected, ControlAction::Decrease);
        }
        if keys_pressed.contains(&KeyCode::Right) {
            self.adjust(self.selected, ControlAction::Increase);
        }
        if keys_pressed.contains(&KeyCode::S) {
            self.adjust(ControlField::ShadeRegions, ControlAction::Increase);
        }

        if keys_pressed.contains(&KeyCode::R) {
            self.config.seed = fresh_seed;
            self.config_changed = true;
            self.regenerate();
        } else if keys_pressed.contains(&KeyCode::Enter) {
            self.regenerate();
        }
    }

    /// Start a background run with the current config. Whatever was shown is dropped, and a
    /// run still in flight is abandoned.
    pub fn regenerate(&mut self) {
        info!("regenerating seed {}", self.config.seed);
        let generator = MapGenerator::new(self.config.clone());
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone when a newer run replaced this one.
            let _ = sender.send(generator.generate());
        });
        self.pending = Some(receiver);
        self.mode = ViewerMode::Generating;
        self.stale = false;
    }

    /// Pick up a finished background run without blocking. Returns whether the mode changed.
    pub fn poll_generation(&mut self) -> bool {
        let Some(receiver) = &self.pending else {
            return false;
        };
        match receiver.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                self.apply_outcome(outcome);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.abandon_run();
                true
            }
        }
    }

    /// Block until the run in flight, if any, lands.
    pub fn wait_for_generation(&mut self) {
        let Some(receiver) = self.pending.take() else {
            return;
        };
        match receiver.recv() {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(_) => self.abandon_run(),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn apply_outcome(&mut self, outcome: Result<Grid, GenerationError>) {
        self.mode = match outcome {
            Ok(grid) => ViewerMode::Ready(grid),
            Err(err) => ViewerMode::Failed(err),
        };
    }

    pub fn grid(&self) -> Option<&Grid> {
        match &self.mode {
            ViewerMode::Ready(grid) => Some(grid),
            ViewerMode::Empty | ViewerMode::Generating | ViewerMode::Failed(_) => None,
        }
    }

    fn abandon_run(&mut self) {
        warn!("generation worker for seed {} exited without a result", self.config.seed);
        self.pending = None;
        self.mode = ViewerMode::Empty;
    }

    fn adjust(&mut self, field: ControlField, action: ControlAction) {
        if !adjust_field(&mut self.config, field, action) {
            return;
        }
        self.config_changed = true;
        if !field.is_render_only() && !matches!(self.mode, ViewerMode::Empty) {
            self.stale = true;
        }
    }
}
