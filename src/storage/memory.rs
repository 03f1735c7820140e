use super::FenceStorage;
use crate::fence::FencePoint;
use anyhow::Result;

/// In-process storage, mainly for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    points: Vec<FencePoint>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-existing point set, as if restored from a prior run
    pub fn with_points(points: Vec<FencePoint>) -> Self {
        Self { points }
    }
}

impl FenceStorage for MemoryStorage {
    fn save(&mut self, points: &[FencePoint]) -> Result<()> {
        self.points = points.to_vec();
        Ok(())
    }

    fn load(&self) -> Vec<FencePoint> {
        self.points.clone()
    }
}
