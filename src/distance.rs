//! Great-circle distance between two points.

use crate::point::Point;

/// Mean Earth radius in meters, per the spherical law of cosines model used here.
pub const EARTH_RADIUS_M: f64 = 6_378_135.0;

/// Great-circle distance between `a` and `b`, in meters.
///
/// Uses the spherical law of cosines. The intermediate cosine term is clamped
/// to `[-1, 1]` before calling `acos`: floating-point drift can otherwise push
/// it slightly above `1.0` for nearly-identical points, which would make
/// `acos` return `NaN`. With the clamp, `distance(p, p) == 0.0` exactly.
pub fn distance(a: Point, b: Point) -> f64 {
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();
    let lon_a = a.lon().to_radians();
    let lon_b = b.lon().to_radians();

    let u = lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * (lon_b - lon_a).cos();
    let u = u.clamp(-1.0, 1.0);
    EARTH_RADIUS_M * u.acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> Point {
        Point::new(lat, lon).unwrap()
    }

    #[test]
    fn distance_to_self_is_exactly_zero() {
        let p = pt(47.291288, 8.56613);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn continental_distance_matches_reference_within_half_percent() {
        let boston = pt(37.0, -122.0);
        let newark = pt(42.0, -75.0);
        let d = distance(boston, newark);
        let reference = 4_024_365.0;
        assert!((d - reference).abs() / reference < 0.005, "got {d}");
    }

    #[test]
    fn cross_country_distance_matches_reference_within_half_percent() {
        let nashville = pt(36.12, -86.67);
        let los_angeles = pt(33.94, -118.40);
        let d = distance(nashville, los_angeles);
        let reference = 2_889_677.0;
        assert!((d - reference).abs() / reference < 0.005, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = pt(10.0, 20.0);
        let b = pt(-5.0, 100.0);
        assert!((distance(a, b) - distance(b, a)).abs() < 1e-6);
    }

    #[test]
    fn antipodal_points_are_half_the_great_circle() {
        let a = pt(0.0, 0.0);
        let b = pt(0.0, 180.0);
        let d = distance(a, b);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1.0);
    }
}
