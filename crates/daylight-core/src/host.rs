//! The building document the dialog is opened against.
//!
//! Levels and the native length unit belong to the host application; the
//! form only needs the ordered level list and a conversion to millimetres.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HostError;

pub const MILLIMETRES_PER_FOOT: f64 = 304.8;

/// A building story, with its elevation in the host's native length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub elevation: f64,
}

impl Level {
    pub fn new(name: impl Into<String>, elevation: f64) -> Self {
        Self { name: name.into(), elevation }
    }
}

pub trait UnitConverter {
    fn elevation_to_millimetres(&self, value: f64) -> f64;
}

impl<F> UnitConverter for F
where
    F: Fn(f64) -> f64,
{
    fn elevation_to_millimetres(&self, value: f64) -> f64 {
        self(value)
    }
}

pub trait HostDocument: UnitConverter {
    /// Levels in document order.
    fn list_levels(&self) -> Vec<Level>;
}

/// Host document whose native length unit is decimal feet.
#[derive(Debug, Clone, Default)]
pub struct FeetDocument {
    levels: Vec<Level>,
}

impl FeetDocument {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Ground floor and two upper stories at 0, 3000 and 6000 mm.
    pub fn demo() -> Self {
        Self::new(vec![
            Level::new("Level 0", 0.0),
            Level::new("Level 1", 3000.0 / MILLIMETRES_PER_FOOT),
            Level::new("Level 2", 6000.0 / MILLIMETRES_PER_FOOT),
        ])
    }

    /// Read a level export: a JSON array of `{"name", "elevation"}` objects in feet.
    pub fn load_from_file(path: &Path) -> Result<Self, HostError> {
        let json = fs::read_to_string(path).map_err(|source| HostError::Read { path: path.to_path_buf(), source })?;
        let levels: Vec<Level> =
            serde_json::from_str(&json).map_err(|source| HostError::Parse { path: path.to_path_buf(), source })?;

        if levels.is_empty() {
            return Err(HostError::Empty(path.to_path_buf()));
        }

        log::info!("Loaded {} levels from {}", levels.len(), path.display());
        Ok(Self::new(levels))
    }
}

impl UnitConverter for FeetDocument {
    fn elevation_to_millimetres(&self, value: f64) -> f64 {
        value * MILLIMETRES_PER_FOOT
    }
}

impl HostDocument for FeetDocument {
    fn list_levels(&self) -> Vec<Level> {
        self.levels.clone()
    }
}
