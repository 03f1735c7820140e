pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::fence::FencePoint;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Durable backend for one fence's point list
///
/// Every `save` replaces the whole collection, so there is no partial-write
/// state to roll back. `load` is tolerant: missing or malformed data comes
/// back as an empty list, never an error.
pub trait FenceStorage {
    fn save(&mut self, points: &[FencePoint]) -> Result<()>;
    fn load(&self) -> Vec<FencePoint>;
}

/// Wire record: `{"latitude": .., "longitude": .., "pointNumber": ..}`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredPoint {
    latitude: f64,
    longitude: f64,
    point_number: u32,
}

impl From<&FencePoint> for StoredPoint {
    fn from(point: &FencePoint) -> Self {
        let (latitude, longitude) = point.coordinate;
        Self {
            latitude,
            longitude,
            point_number: point.point_number,
        }
    }
}

impl From<StoredPoint> for FencePoint {
    fn from(record: StoredPoint) -> Self {
        FencePoint::new((record.latitude, record.longitude), record.point_number)
    }
}
