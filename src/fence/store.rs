use super::FencePoint;
use crate::storage::FenceStorage;

type Observer = Box<dyn FnMut(&[FencePoint])>;

/// Ordered collection of boundary points for one fence
///
/// The store owns the session's point list, writes it through to an injected
/// storage backend after every mutation, and notifies the single registered
/// observer with the full list. One store per editing session; no operation
/// here fails: a bad index is ignored and a failed write is only warned about,
/// since the surrounding caller has no error path for a drawing aid.
pub struct FencePointStore {
    points: Vec<FencePoint>,
    storage: Box<dyn FenceStorage>,
    observer: Option<Observer>,
}

impl FencePointStore {
    pub fn new(storage: Box<dyn FenceStorage>) -> Self {
        Self {
            points: Vec::new(),
            storage,
            observer: None,
        }
    }

    /// Replace the in-memory points with whatever the backend holds
    ///
    /// Missing or malformed stored data restores an empty list. Notifies the
    /// observer but does not re-save what was just loaded.
    pub fn restore(&mut self) {
        self.points = self.storage.load();
        self.notify();
    }

    /// Append a point numbered `len + 1`
    pub fn add_point(&mut self, coordinate: (f64, f64)) {
        let point_number = self.points.len() as u32 + 1;
        self.points.push(FencePoint::new(coordinate, point_number));
        self.commit();
    }

    /// Move the point at a 0-based index, keeping its number
    ///
    /// The index is derived upstream from display-label text that can be
    /// malformed, so an out-of-range index is a silent no-op rather than an
    /// error. Callers relying on this tolerance exist; do not make it fail.
    pub fn update_point(&mut self, index: usize, coordinate: (f64, f64)) {
        let Some(point) = self.points.get_mut(index) else {
            return;
        };
        point.coordinate = coordinate;
        self.commit();
    }

    /// Drop every point, leaving an empty persisted set
    pub fn reset(&mut self) {
        self.points.clear();
        self.commit();
    }

    /// Register the observer called with the full point list after every
    /// mutation; replaces any previously registered observer
    pub fn set_observer(&mut self, observer: impl FnMut(&[FencePoint]) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn points(&self) -> &[FencePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A fence can be closed into a polygon once it has at least 3 points
    pub fn is_closeable(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn coordinates(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| p.coordinate).collect()
    }

    fn commit(&mut self) {
        if let Err(e) = self.storage.save(&self.points) {
            eprintln!("Warning: failed to save fence points: {:#}", e);
        }
        self.notify();
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.points);
        }
    }
}
