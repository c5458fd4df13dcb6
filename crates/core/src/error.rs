//! Error types for map generation and configuration loading.

use std::error::Error;
use std::fmt;
use std::io;

use crate::types::Pos;

/// A generation run that cannot complete. The partially built grid is discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationError {
    /// A search dereferenced a coordinate outside `[0, size)` on either axis.
    OutOfBounds { pos: Pos, size: usize },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "position ({}, {}) is outside the {size}x{size} grid", pos.x, pos.y)
            }
        }
    }
}

impl Error for GenerationError {}

/// Describes why a configuration file could not be loaded.
#[derive(Debug)]
pub enum ConfigLoadError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// The file is not valid TOML or a field has the wrong type.
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}
