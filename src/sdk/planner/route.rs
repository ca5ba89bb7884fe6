use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PlannerError;

/// A latitude/longitude pair in decimal degrees.
///
/// The planner does no range validation; out-of-range values pass through
/// unchanged. Only finiteness is checked, and only when a coordinate is
/// rendered into a URL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for Coord {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl FromStr for Coord {
    type Err = String;

    /// Parses `"lat,lon"`, e.g. `"51.0480293,-114.0640164"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("expected \"lat,lon\", got \"{s}\""))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad latitude \"{}\": {e}", lat.trim()))?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("bad longitude \"{}\": {e}", lon.trim()))?;
        Ok(Self::new(lat, lon))
    }
}

/// Canonical URL form of one coordinate: `"lat,lon"`, `.` as the decimal
/// separator regardless of locale.
pub fn format_coord(coord: Coord) -> Result<String, PlannerError> {
    if !coord.is_finite() {
        return Err(PlannerError::InvalidCoordinate {
            lat: coord.lat,
            lon: coord.lon,
        });
    }
    Ok(format!("{},{}", coord.lat, coord.lon))
}

/// Joins coordinates with `sep`, failing on the first non-finite one and
/// producing no partial output.
pub fn concat_coords(coords: &[Coord], sep: char) -> Result<String, PlannerError> {
    let parts = coords
        .iter()
        .map(|&c| format_coord(c))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(&sep.to_string()))
}

/// An ordered driving route: the fixed start and end anchors around the
/// reorderable stops. Built from its three parts, so a route always holds
/// at least the two anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    coords: Vec<Coord>,
}

impl Route {
    pub fn new(start: Coord, stops: &[Coord], end: Coord) -> Self {
        let mut coords = Vec::with_capacity(stops.len() + 2);
        coords.push(start);
        coords.extend_from_slice(stops);
        coords.push(end);
        Self { coords }
    }

    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    pub fn end(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// The reorderable interior, without the anchors.
    pub fn stops(&self) -> &[Coord] {
        &self.coords[1..self.coords.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_the_canonical_pair() {
        let got = format_coord(Coord::new(51.0480293, -114.0640164)).unwrap();
        assert_eq!(got, "51.0480293,-114.0640164");
    }

    #[test]
    fn rejects_non_finite_components() {
        assert!(matches!(
            format_coord(Coord::new(f64::NAN, 0.0)),
            Err(PlannerError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            format_coord(Coord::new(0.0, f64::INFINITY)),
            Err(PlannerError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn concat_uses_the_given_separator() {
        let coords = [Coord::new(1.5, 2.5), Coord::new(3.0, -4.25)];
        assert_eq!(concat_coords(&coords, ':').unwrap(), "1.5,2.5:3,-4.25");
        assert_eq!(concat_coords(&coords, '/').unwrap(), "1.5,2.5/3,-4.25");
    }

    #[test]
    fn concat_fails_on_any_invalid_coordinate() {
        let coords = [Coord::new(1.0, 1.0), Coord::new(f64::NAN, 2.0)];
        assert!(concat_coords(&coords, ':').is_err());
    }

    #[test]
    fn parses_lat_lon_strings() {
        let coord: Coord = "51.0480293,-114.0640164".parse().unwrap();
        assert_eq!(coord, Coord::new(51.0480293, -114.0640164));
        assert!(" 51.0 , -114.0 ".parse::<Coord>().is_ok());
        assert!("51.0".parse::<Coord>().is_err());
        assert!("a,b".parse::<Coord>().is_err());
    }

    #[test]
    fn route_brackets_stops_with_anchors() {
        let start = Coord::new(0.0, 0.0);
        let end = Coord::new(9.0, 9.0);
        let stops = [Coord::new(1.0, 1.0), Coord::new(2.0, 2.0)];
        let route = Route::new(start, &stops, end);
        assert_eq!(route.len(), 4);
        assert_eq!(route.start(), start);
        assert_eq!(route.end(), end);
        assert_eq!(route.stops(), &stops);
    }

    #[test]
    fn a_route_without_stops_is_just_the_anchors() {
        let route = Route::new(Coord::new(1.0, 2.0), &[], Coord::new(3.0, 4.0));
        assert_eq!(route.len(), 2);
        assert!(route.stops().is_empty());
    }
}
