use geo::{GeodesicDistance, Point};

const METERS_PER_MILE: f64 = 1609.344;

/// Calculate the geodesic distance between two points in miles
///
/// Uses the WGS84 ellipsoid (sub-meter model error) rather than a
/// spherical approximation: eligibility hinges on a strict 5-mile
/// threshold, and pairs near the cutoff are sensitive to model choice.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles; zero for identical points
///
/// Coordinates are not range-checked here — callers supply data already
/// validated at load time. Out-of-range input yields a meaningless
/// distance rather than an error.
#[inline]
pub fn geodesic_distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = Point::new(lon1, lat1);
    let b = Point::new(lon2, lat2);

    a.geodesic_distance(&b) / METERS_PER_MILE
}
