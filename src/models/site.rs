//! Affected-site model.
//!
//! A site is a disaster-affected area awaiting relief. Sites are created
//! once at run start and identified by their index into the site list;
//! the allocator owns the list and flips each site's status exactly once.

use serde::{Deserialize, Serialize};

/// A disaster-affected site awaiting relief.
///
/// Graph node mapping: the dispatch center is node 0, and the site at
/// list index `i` is graph node `i + 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Human-readable name.
    pub name: String,
    /// Urgency score. Higher severity is served sooner. Must be >= 0.
    pub severity: i64,
    /// Serve state, mutated exactly once by the allocator.
    pub status: SiteStatus,
    /// Optional coordinates, for callers deriving road weights from
    /// geography. Not consulted by the allocation loop.
    pub location: Option<Location>,
}

impl Site {
    /// Creates a pending site with the given name and severity.
    pub fn new(name: impl Into<String>, severity: i64) -> Self {
        Self {
            name: name.into(),
            severity,
            status: SiteStatus::Pending,
            location: None,
        }
    }

    /// Sets the site coordinates.
    pub fn with_location(mut self, lat: f64, lon: f64) -> Self {
        self.location = Some(Location { lat, lon });
        self
    }

    /// Whether this site has been served.
    pub fn is_served(&self) -> bool {
        self.status == SiteStatus::Served
    }

    /// Severity zone classification for this site.
    pub fn zone(&self) -> SeverityZone {
        SeverityZone::for_severity(self.severity)
    }
}

/// Serve state of a site. `Served` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteStatus {
    /// Awaiting dispatch.
    Pending,
    /// Relief delivered (or attempted, when no route exists).
    Served,
}

/// Severity band used by reporting layers for color coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityZone {
    /// Severity >= 8.
    Red,
    /// Severity 5..=7.
    Yellow,
    /// Severity < 5.
    Green,
}

impl SeverityZone {
    /// Classifies a severity score into a zone.
    pub fn for_severity(severity: i64) -> Self {
        if severity >= 8 {
            SeverityZone::Red
        } else if severity >= 5 {
            SeverityZone::Yellow
        } else {
            SeverityZone::Green
        }
    }
}

/// Geographic coordinates in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

/// Mean Earth radius (km) for Haversine distance.
const EARTH_RADIUS_KM: f64 = 6371.0;

impl Location {
    /// Creates a location.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another location (km), via the
    /// Haversine formula.
    pub fn distance_km(&self, other: &Location) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlon = (other.lon - self.lon).to_radians();

        let a = (dlat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_builder() {
        let site = Site::new("Area A", 5).with_location(28.61, 77.23);

        assert_eq!(site.name, "Area A");
        assert_eq!(site.severity, 5);
        assert_eq!(site.status, SiteStatus::Pending);
        assert!(!site.is_served());
        assert_eq!(site.location, Some(Location::new(28.61, 77.23)));
    }

    #[test]
    fn test_zone_thresholds() {
        assert_eq!(SeverityZone::for_severity(10), SeverityZone::Red);
        assert_eq!(SeverityZone::for_severity(8), SeverityZone::Red);
        assert_eq!(SeverityZone::for_severity(7), SeverityZone::Yellow);
        assert_eq!(SeverityZone::for_severity(5), SeverityZone::Yellow);
        assert_eq!(SeverityZone::for_severity(4), SeverityZone::Green);
        assert_eq!(SeverityZone::for_severity(0), SeverityZone::Green);
    }

    #[test]
    fn test_haversine_zero_distance() {
        let p = Location::new(28.6129, 77.2295);
        assert!(p.distance_km(&p) < 1e-9);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Delhi to Mumbai, roughly 1150 km great-circle.
        let delhi = Location::new(28.6139, 77.2090);
        let mumbai = Location::new(19.0760, 72.8777);
        let d = delhi.distance_km(&mumbai);
        assert!(d > 1100.0 && d < 1200.0, "got {d}");
    }
}
