use geo::{LineString, Polygon, coord};

/// Arithmetic-mean center of a set of (lat, lon) points
///
/// Planar approximation: degrees are averaged directly, with no geodesic
/// correction. Fine at fence scale, wrong across the antimeridian.
pub fn centroid(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.0).sum::<f64>() / n;
    let lon = points.iter().map(|p| p.1).sum::<f64>() / n;
    Some((lat, lon))
}

/// Order points angularly around their centroid so the resulting ring does
/// not self-intersect
///
/// Sorts by ascending `atan2(lat - c_lat, lon - c_lon)`. Correct for convex
/// point sets; concave arrangements can still come out misordered, a known
/// limitation kept for parity with the stored fences this tool reads.
pub fn sort_clockwise(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let Some((c_lat, c_lon)) = centroid(points) else {
        return Vec::new();
    };
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        let angle_a = (a.0 - c_lat).atan2(a.1 - c_lon);
        let angle_b = (b.0 - c_lat).atan2(b.1 - c_lon);
        angle_a.total_cmp(&angle_b)
    });
    sorted
}

/// Build a closed polygon from fence coordinates, winding them first
///
/// Returns None with fewer than 3 points.
pub fn fence_polygon(points: &[(f64, f64)]) -> Option<Polygon<f64>> {
    if points.len() < 3 {
        return None;
    }
    Some(ring_polygon(&sort_clockwise(points)))
}

/// Turn an already-ordered (lat, lon) ring into a `geo` polygon (x = lon,
/// y = lat); the exterior is closed by construction
pub fn ring_polygon(ring: &[(f64, f64)]) -> Polygon<f64> {
    let exterior: LineString<f64> = ring
        .iter()
        .map(|&(lat, lon)| coord! { x: lon, y: lat })
        .collect();
    Polygon::new(exterior, vec![])
}
