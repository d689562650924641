//! WGS-84 reference ellipsoid and solver limits.

pub const SEMI_MAJOR_AXIS_KM: f64 = 6378.137;
pub const FLATTENING: f64 = 1.0 / 298.257_223_563;
pub const SEMI_MINOR_AXIS_KM: f64 = SEMI_MAJOR_AXIS_KM * (1.0 - FLATTENING);

/// IUGG mean radius `(2a + b) / 3`, used by the spherical fallback.
pub const MEAN_RADIUS_KM: f64 = (2.0 * SEMI_MAJOR_AXIS_KM + SEMI_MINOR_AXIS_KM) / 3.0;

/// Change in auxiliary longitude (radians) below which the solver stops.
pub const CONVERGENCE_TOLERANCE_RAD: f64 = 1e-12;
pub const MAX_ITERATIONS: u32 = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semi_minor_axis_matches_published_value() {
        assert!((SEMI_MINOR_AXIS_KM - 6356.752_314_245).abs() < 1e-9);
    }

    #[test]
    fn mean_radius_matches_published_value() {
        assert!((MEAN_RADIUS_KM - 6371.008_771_415).abs() < 1e-9);
    }
}
