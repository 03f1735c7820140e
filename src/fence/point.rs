use thiserror::Error;

/// One vertex of the fence polygon plus its display index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FencePoint {
    /// Position as (lat, lon) in WGS84 degrees
    pub coordinate: (f64, f64),
    /// 1-based label assigned at insertion time, display only
    pub point_number: u32,
}

impl FencePoint {
    pub fn new(coordinate: (f64, f64), point_number: u32) -> Self {
        Self {
            coordinate,
            point_number,
        }
    }
}

/// Error parsing a "LAT,LON" coordinate argument
#[derive(Debug, Error, PartialEq)]
pub enum ParseCoordError {
    #[error("expected LAT,LON, got {0:?}")]
    Format(String),
    #[error("invalid number in coordinate: {0:?}")]
    Number(String),
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeRange(f64),
}

/// Parse a "LAT,LON" string into a (lat, lon) pair
///
/// Range validation happens here, at the input boundary; the store itself
/// accepts whatever degrees it is handed.
pub fn parse_coord(s: &str) -> Result<(f64, f64), ParseCoordError> {
    let (lat_str, lon_str) = s
        .split_once(',')
        .ok_or_else(|| ParseCoordError::Format(s.to_string()))?;

    let lat: f64 = lat_str
        .trim()
        .parse()
        .map_err(|_| ParseCoordError::Number(lat_str.trim().to_string()))?;
    let lon: f64 = lon_str
        .trim()
        .parse()
        .map_err(|_| ParseCoordError::Number(lon_str.trim().to_string()))?;

    if !(-90.0..=90.0).contains(&lat) {
        return Err(ParseCoordError::LatitudeRange(lat));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(ParseCoordError::LongitudeRange(lon));
    }

    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coord_basic() {
        assert_eq!(parse_coord("12.8237,80.0461"), Ok((12.8237, 80.0461)));
    }

    #[test]
    fn test_parse_coord_whitespace_and_negatives() {
        assert_eq!(parse_coord(" 37.7749 , -122.4194 "), Ok((37.7749, -122.4194)));
    }

    #[test]
    fn test_parse_coord_missing_comma() {
        assert_eq!(
            parse_coord("12.8 80.0"),
            Err(ParseCoordError::Format("12.8 80.0".to_string()))
        );
    }

    #[test]
    fn test_parse_coord_bad_number() {
        assert_eq!(
            parse_coord("north,80.0"),
            Err(ParseCoordError::Number("north".to_string()))
        );
    }

    #[test]
    fn test_parse_coord_out_of_range() {
        assert_eq!(
            parse_coord("91.0,0.0"),
            Err(ParseCoordError::LatitudeRange(91.0))
        );
        assert_eq!(
            parse_coord("0.0,-180.5"),
            Err(ParseCoordError::LongitudeRange(-180.5))
        );
    }
}
