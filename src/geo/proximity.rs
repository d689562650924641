use serde::Serialize;

use super::distance::measure;
use super::error::{GeoError, GeoResult};
use super::point::{GeoPoint, Located};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProximityStats {
    pub evaluated: usize,
    pub matched: usize,
    /// Candidates whose distance came from the spherical fallback.
    pub fallbacks: usize,
}

#[derive(Debug, Clone)]
pub struct ProximityOutcome<T> {
    pub matches: Vec<T>,
    pub stats: ProximityStats,
}

/// A validated "within `radius_km` of `center`" predicate.
///
/// The radius bound is inclusive and candidates are kept in the order they
/// are supplied; nothing is sorted by distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityFilter {
    center: GeoPoint,
    radius_km: f64,
}

impl ProximityFilter {
    pub fn new(center: GeoPoint, radius_km: f64) -> GeoResult<Self> {
        if radius_km.is_nan() || radius_km < 0.0 {
            return Err(GeoError::InvalidRadius(radius_km));
        }
        center.validate()?;

        Ok(Self { center, radius_km })
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    #[cfg(test)]
    fn contains(&self, candidate: &impl Located) -> GeoResult<bool> {
        let measurement = measure(candidate.location(), self.center)?;
        Ok(measurement.kilometers <= self.radius_km)
    }

    /// Scans every candidate once. The first oracle failure aborts the whole
    /// scan; no partial result is returned.
    pub fn apply<T, I>(&self, candidates: I) -> GeoResult<ProximityOutcome<T>>
    where
        T: Located,
        I: IntoIterator<Item = T>,
    {
        let mut stats = ProximityStats::default();
        let mut matches = Vec::new();

        for candidate in candidates {
            let measurement = measure(candidate.location(), self.center)?;
            stats.evaluated += 1;
            if measurement.is_fallback() {
                stats.fallbacks += 1;
            }
            if measurement.kilometers <= self.radius_km {
                stats.matched += 1;
                matches.push(candidate);
            }
        }

        Ok(ProximityOutcome { matches, stats })
    }
}

/// Returns the candidates within `radius_km` kilometers of `center`, in input
/// order.
pub fn find_within<T, I>(center: GeoPoint, radius_km: f64, candidates: I) -> GeoResult<Vec<T>>
where
    T: Located,
    I: IntoIterator<Item = T>,
{
    ProximityFilter::new(center, radius_km)?
        .apply(candidates)
        .map(|outcome| outcome.matches)
}
