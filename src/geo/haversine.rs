use super::ellipsoid::MEAN_RADIUS_KM;
use super::point::GeoPoint;

/// Great-circle distance on a sphere of the WGS-84 mean radius.
///
/// Callers validate the points. The intermediate term is clamped into
/// `[0, 1]` so rounding never pushes antipodal inputs past `asin`'s domain.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = ((d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    2.0 * MEAN_RADIUS_KM * h.sqrt().asin()
}
