//! Offline geocoder backed by a list of known places

use ridefare_domain::model::{Coordinates, KnownPlace};
use ridefare_domain::service::{GeocodeError, Geocoder};

/// Resolves place strings against a fixed set of named coordinates.
///
/// The place string is split on commas and segments are tried from the
/// most specific (first) to the least specific (last). Within a segment
/// the longest known name contained in it wins.
#[derive(Debug, Clone, Default)]
pub struct KnownPlacesGeocoder {
    // lowercase name, coordinates
    places: Vec<(String, Coordinates)>,
}

impl KnownPlacesGeocoder {
    pub fn new(places: &[KnownPlace]) -> Self {
        let mut places: Vec<_> = places
            .iter()
            .map(|p| (p.name.trim().to_lowercase(), p.coordinates()))
            .filter(|(name, _)| !name.is_empty())
            .collect();
        // longest first so the first hit in a segment is the most specific
        places.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { places }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn match_segment(&self, segment: &str) -> Option<Coordinates> {
        self.places
            .iter()
            .find(|(name, _)| segment.contains(name.as_str()))
            .map(|(_, coords)| *coords)
    }
}

impl Geocoder for KnownPlacesGeocoder {
    fn geocode(&self, place: &str) -> Result<Coordinates, GeocodeError> {
        let lower = place.to_lowercase();
        lower
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .find_map(|segment| self.match_segment(segment))
            .ok_or_else(|| GeocodeError::NotFound(place.to_string()))
    }
}
