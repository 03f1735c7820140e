use super::{FenceStorage, StoredPoint};
use crate::fence::FencePoint;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// File-backed storage: one JSON array of point records per fence,
/// overwritten wholesale on every save
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FenceStorage for JsonFileStorage {
    fn save(&mut self, points: &[FencePoint]) -> Result<()> {
        let records: Vec<StoredPoint> = points.iter().map(Into::into).collect();
        let json = serde_json::to_string(&records)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write fence file: {}", self.path.display()))?;
        Ok(())
    }

    fn load(&self) -> Vec<FencePoint> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<StoredPoint>>(&contents) {
            Ok(records) => records.into_iter().map(Into::into).collect(),
            Err(_) => Vec::new(),
        }
    }
}
