use super::{FencePoint, FencePointStore};
use crate::geometry::{fence_polygon, ring_polygon, sort_clockwise};
use geo::Polygon;

/// One fence-editing session: a point store plus finalization state
///
/// Until the fence is finalized the polygon is re-derived from the current
/// points on every read. Finalizing (allowed once the fence is closeable)
/// computes the winding once, caches it, and freezes the points: add and
/// move are refused until a reset re-opens the session.
pub struct FenceSession {
    store: FencePointStore,
    finalized: bool,
    ring: Option<Vec<(f64, f64)>>,
}

impl FenceSession {
    pub fn new(store: FencePointStore) -> Self {
        Self {
            store,
            finalized: false,
            ring: None,
        }
    }

    /// Load previously persisted points into the session
    pub fn restore(&mut self) {
        self.store.restore();
    }

    /// Add a boundary point; returns false if the fence is already finalized
    pub fn add_point(&mut self, coordinate: (f64, f64)) -> bool {
        if self.finalized {
            return false;
        }
        self.store.add_point(coordinate);
        true
    }

    /// Move a point by 0-based index; returns false if finalized
    ///
    /// An out-of-range index on an open session still returns true: the
    /// store treats it as a tolerated no-op, not a refusal.
    pub fn move_point(&mut self, index: usize, coordinate: (f64, f64)) -> bool {
        if self.finalized {
            return false;
        }
        self.store.update_point(index, coordinate);
        true
    }

    /// Clear all points and re-open the session for drawing
    pub fn reset(&mut self) {
        self.finalized = false;
        self.ring = None;
        self.store.reset();
    }

    /// Freeze the fence and return its clockwise ring
    ///
    /// Returns None while the fence has fewer than 3 points. Finalizing an
    /// already finalized session returns the cached ring unchanged.
    pub fn finalize(&mut self) -> Option<&[(f64, f64)]> {
        if !self.finalized {
            if !self.store.is_closeable() {
                return None;
            }
            self.ring = Some(sort_clockwise(&self.store.coordinates()));
            self.finalized = true;
        }
        self.ring.as_deref()
    }

    /// The closed polygon for the current fence, if closeable
    pub fn polygon(&self) -> Option<Polygon<f64>> {
        match &self.ring {
            Some(ring) => Some(ring_polygon(ring)),
            None => fence_polygon(&self.store.coordinates()),
        }
    }

    pub fn points(&self) -> &[FencePoint] {
        self.store.points()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn is_closeable(&self) -> bool {
        self.store.is_closeable()
    }

    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.store.coordinates()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn session() -> FenceSession {
        FenceSession::new(FencePointStore::new(Box::new(MemoryStorage::new())))
    }

    fn draw_triangle(session: &mut FenceSession) {
        session.add_point((12.0, 80.0));
        session.add_point((12.001, 80.0));
        session.add_point((12.001, 80.001));
    }

    #[test]
    fn test_closeable_transition_at_third_point() {
        let mut session = session();
        session.add_point((12.0, 80.0));
        session.add_point((12.001, 80.0));
        assert!(!session.is_closeable());
        assert!(session.polygon().is_none());

        session.add_point((12.001, 80.001));
        assert_eq!(session.len(), 3);
        assert!(session.is_closeable());
        assert!(session.polygon().is_some());
    }

    #[test]
    fn test_finalize_requires_three_points() {
        let mut session = session();
        session.add_point((0.0, 0.0));
        session.add_point((1.0, 1.0));
        assert!(session.finalize().is_none());
        assert!(!session.is_finalized());
    }

    #[test]
    fn test_finalize_freezes_points() {
        let mut session = session();
        draw_triangle(&mut session);

        let ring = session.finalize().unwrap().to_vec();
        assert_eq!(ring.len(), 3);
        assert!(session.is_finalized());

        assert!(!session.add_point((13.0, 81.0)));
        assert!(!session.move_point(0, (13.0, 81.0)));
        assert_eq!(session.len(), 3);
        assert_eq!(session.points()[0].coordinate, (12.0, 80.0));
    }

    #[test]
    fn test_finalized_ring_is_not_recomputed() {
        let mut session = session();
        draw_triangle(&mut session);
        let ring = session.finalize().unwrap().to_vec();

        // Second finalize hands back the same cached ring
        assert_eq!(session.finalize().unwrap(), &ring[..]);

        let polygon = session.polygon().unwrap();
        assert_eq!(polygon.exterior().0.len(), ring.len() + 1);
    }

    #[test]
    fn test_reset_reopens_session() {
        let mut session = session();
        draw_triangle(&mut session);
        session.finalize();

        session.reset();
        assert!(session.is_empty());
        assert!(!session.is_finalized());
        assert!(session.add_point((5.0, 5.0)));
        assert_eq!(session.points()[0].point_number, 1);
    }

    #[test]
    fn test_polygon_ring_is_closed() {
        let mut session = session();
        draw_triangle(&mut session);

        let polygon = session.polygon().unwrap();
        let exterior = &polygon.exterior().0;
        assert_eq!(exterior.first(), exterior.last());
    }

    #[test]
    fn test_restore_stays_open_for_editing() {
        let storage = MemoryStorage::with_points(vec![
            FencePoint::new((12.0, 80.0), 1),
            FencePoint::new((12.001, 80.0), 2),
            FencePoint::new((12.001, 80.001), 3),
        ]);
        let mut session = FenceSession::new(FencePointStore::new(Box::new(storage)));
        session.restore();

        assert_eq!(session.len(), 3);
        assert!(session.is_closeable());
        // Restored fences stay editable until explicitly finalized
        assert!(!session.is_finalized());
        assert!(session.add_point((12.002, 80.002)));
        assert_eq!(session.points()[3].point_number, 4);
    }
}
