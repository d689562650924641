use std::cmp::Ordering;
use std::f64::consts::PI;

use serde::Serialize;

use super::ellipsoid::{
    CONVERGENCE_TOLERANCE_RAD, FLATTENING, MAX_ITERATIONS, SEMI_MAJOR_AXIS_KM, SEMI_MINOR_AXIS_KM,
};
use super::error::GeoResult;
use super::haversine::haversine_km;
use super::point::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMethod {
    /// Coordinate-equal points or the same pole; the solver was skipped.
    Identical,
    Vincenty,
    /// The ellipsoidal solver did not converge and the spherical
    /// approximation was used instead.
    Haversine,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub kilometers: f64,
    pub method: DistanceMethod,
    pub iterations: u32,
}

impl Measurement {
    pub fn is_fallback(&self) -> bool {
        self.method == DistanceMethod::Haversine
    }

    const fn zero() -> Self {
        Self {
            kilometers: 0.0,
            method: DistanceMethod::Identical,
            iterations: 0,
        }
    }
}

/// Geodesic distance in kilometers between two points on the WGS-84
/// ellipsoid.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> GeoResult<f64> {
    measure(a, b).map(|measurement| measurement.kilometers)
}

/// Like [`distance_km`] but also reports how the value was obtained.
pub fn measure(a: GeoPoint, b: GeoPoint) -> GeoResult<Measurement> {
    a.validate()?;
    b.validate()?;

    if a == b || (a.is_pole() && a.latitude == b.latitude) {
        return Ok(Measurement::zero());
    }

    // Solve in a fixed argument order so swapping the inputs yields the
    // same floating-point result.
    let (from, to) = match compare_points(&a, &b) {
        Ordering::Greater => (b, a),
        _ => (a, b),
    };

    match vincenty_inverse(from, to) {
        Some((kilometers, iterations)) => Ok(Measurement {
            kilometers,
            method: DistanceMethod::Vincenty,
            iterations,
        }),
        None => {
            let kilometers = haversine_km(from, to);
            tracing::debug!(
                from_latitude = from.latitude,
                from_longitude = from.longitude,
                to_latitude = to.latitude,
                to_longitude = to.longitude,
                kilometers,
                "geodesic solver did not converge, using spherical approximation"
            );
            Ok(Measurement {
                kilometers,
                method: DistanceMethod::Haversine,
                iterations: MAX_ITERATIONS,
            })
        }
    }
}

fn compare_points(a: &GeoPoint, b: &GeoPoint) -> Ordering {
    a.latitude
        .total_cmp(&b.latitude)
        .then(a.longitude.total_cmp(&b.longitude))
}

/// Wraps a longitude difference in degrees into `[-180, 180]`.
fn wrap_longitude_delta(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta < -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Vincenty's inverse formula. Returns the distance and the number of
/// iterations used, or `None` when the auxiliary longitude leaves `[-pi, pi]`
/// or fails to settle, which happens for nearly antipodal points.
fn vincenty_inverse(from: GeoPoint, to: GeoPoint) -> Option<(f64, u32)> {
    let a = SEMI_MAJOR_AXIS_KM;
    let b = SEMI_MINOR_AXIS_KM;
    let f = FLATTENING;

    let l = wrap_longitude_delta(to.longitude - from.longitude).to_radians();
    let u1 = ((1.0 - f) * from.latitude.to_radians().tan()).atan();
    let u2 = ((1.0 - f) * to.latitude.to_radians().tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    for iteration in 1..=MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            return Some((0.0, iteration));
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        // Equatorial geodesics have cos^2(alpha) == 0.
        let cos_2sigma_m = if cos_sq_alpha == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha
        };
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))));

        if !lambda.is_finite() || lambda.abs() > PI {
            return None;
        }

        if (lambda - lambda_prev).abs() < CONVERGENCE_TOLERANCE_RAD {
            let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
            let big_a =
                1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
            let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m.powi(2))
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma.powi(2))
                                * (-3.0 + 4.0 * cos_2sigma_m.powi(2))));
            let s = b * big_a * (sigma - delta_sigma);

            return (s.is_finite() && s >= 0.0).then_some((s, iteration));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::error::GeoError;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint::new(latitude, longitude).unwrap()
    }

    mod reference_values {
        use super::*;

        #[test]
        fn flinders_peak_to_buninyong() {
            let flinders_peak = point(-37.951_033_416_666_67, 144.424_867_888_888_9);
            let buninyong = point(-37.652_821_138_888_89, 143.926_495_527_777_8);

            let measurement = measure(flinders_peak, buninyong).unwrap();

            assert_eq!(measurement.method, DistanceMethod::Vincenty);
            assert!(
                (measurement.kilometers - 54.972_271).abs() < 1e-3,
                "got {}",
                measurement.kilometers
            );
        }

        #[test]
        fn one_degree_along_the_equator_is_one_semi_major_degree() {
            let distance = distance_km(point(0.0, 0.0), point(0.0, 1.0)).unwrap();
            let expected = SEMI_MAJOR_AXIS_KM * 1.0_f64.to_radians();
            assert!((distance - expected).abs() < 1e-6, "got {distance}");
        }

        #[test]
        fn paris_to_london() {
            let distance = distance_km(point(48.8566, 2.3522), point(51.5074, -0.1278)).unwrap();
            assert!((distance - 344.0).abs() < 1.5, "got {distance}");
        }

        #[test]
        fn paris_to_berlin() {
            let distance = distance_km(point(48.8566, 2.3522), point(52.52, 13.405)).unwrap();
            assert!((distance - 879.7).abs() < 0.5, "got {distance}");
        }

        #[test]
        fn meridian_pole_to_equator_is_a_quarter_meridian() {
            let distance = distance_km(point(0.0, 0.0), point(90.0, 0.0)).unwrap();
            assert!((distance - 10_001.965_729).abs() < 1e-3, "got {distance}");
        }
    }

    mod degenerate_inputs {
        use super::*;

        #[test]
        fn identical_points_return_zero_without_solving() {
            let paris = point(48.8566, 2.3522);
            let measurement = measure(paris, paris).unwrap();
            assert_eq!(measurement.kilometers, 0.0);
            assert_eq!(measurement.method, DistanceMethod::Identical);
            assert_eq!(measurement.iterations, 0);
        }

        #[test]
        fn same_pole_with_different_longitudes_is_zero() {
            let measurement = measure(point(90.0, 0.0), point(90.0, 120.0)).unwrap();
            assert_eq!(measurement.kilometers, 0.0);
            assert_eq!(measurement.method, DistanceMethod::Identical);

            let south = distance_km(point(-90.0, -45.0), point(-90.0, 179.0)).unwrap();
            assert_eq!(south, 0.0);
        }

        #[test]
        fn antipodal_points_fall_back_to_spherical_distance() {
            let measurement = measure(point(0.0, 0.0), point(0.0, 180.0)).unwrap();
            assert!(measurement.is_fallback());
            assert!(measurement.kilometers.is_finite());
            assert!(
                (measurement.kilometers - 20_015.0).abs() < 1.0,
                "got {}",
                measurement.kilometers
            );
        }

        #[test]
        fn antimeridian_crossing_uses_short_way_round() {
            let distance = distance_km(point(0.0, 179.5), point(0.0, -179.5)).unwrap();
            let expected = SEMI_MAJOR_AXIS_KM * 1.0_f64.to_radians();
            assert!((distance - expected).abs() < 1e-6, "got {distance}");
        }

        #[test]
        fn opposite_poles_are_reachable_along_a_meridian() {
            let distance = distance_km(point(90.0, 0.0), point(-90.0, 0.0)).unwrap();
            assert!((distance - 20_003.931_458).abs() < 1e-2, "got {distance}");
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn latitude_out_of_range_is_rejected() {
            let invalid = GeoPoint {
                latitude: 95.0,
                longitude: 0.0,
            };
            let result = distance_km(invalid, point(0.0, 0.0));
            assert!(matches!(
                result,
                Err(GeoError::InvalidCoordinate { latitude, .. }) if latitude == 95.0
            ));
        }

        #[test]
        fn second_argument_is_validated_too() {
            let invalid = GeoPoint {
                latitude: 0.0,
                longitude: -200.0,
            };
            assert!(distance_km(point(0.0, 0.0), invalid).is_err());
        }

        #[test]
        fn invalid_point_is_rejected_even_when_equal_to_other() {
            let invalid = GeoPoint {
                latitude: 95.0,
                longitude: 0.0,
            };
            assert!(distance_km(invalid, invalid).is_err());
        }
    }

    mod symmetry {
        use super::*;

        #[test]
        fn swapped_arguments_give_identical_bits() {
            let a = point(-33.8688, 151.2093);
            let b = point(40.7128, -74.006);
            assert_eq!(
                distance_km(a, b).unwrap().to_bits(),
                distance_km(b, a).unwrap().to_bits()
            );
        }
    }

    #[test]
    fn wrap_longitude_delta_folds_into_half_turn() {
        assert_eq!(wrap_longitude_delta(359.0), -1.0);
        assert_eq!(wrap_longitude_delta(-359.0), 1.0);
        assert_eq!(wrap_longitude_delta(180.0), 180.0);
        assert_eq!(wrap_longitude_delta(-45.0), -45.0);
    }
}
