//! geofencer - Draw, edit and persist polygonal geofences

pub mod config;
pub mod fence;
pub mod geometry;
pub mod storage;
