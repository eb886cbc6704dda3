//! Place validation used by the booking flow

/// Decides whether a place name belongs to a city
pub trait PlaceValidator {
    fn validate_place(&self, city: &str, place: &str) -> bool;
}

/// Place kinds that exist in practically every city
const COMMON_PLACE_TERMS: &[&str] = &[
    "station",
    "airport",
    "hospital",
    "school",
    "college",
    "university",
    "market",
    "mall",
    "park",
    "temple",
    "church",
    "mosque",
    "gurudwara",
    "hotel",
    "restaurant",
    "office",
    "building",
    "road",
    "street",
    "area",
];

/// Offline validator: accepts a place that mentions the city, a common
/// place kind, or one of the city's known landmarks
#[derive(Debug, Clone, Default)]
pub struct KeywordPlaceValidator;

impl PlaceValidator for KeywordPlaceValidator {
    fn validate_place(&self, city: &str, place: &str) -> bool {
        let place_lower = place.trim().to_lowercase();
        let city_lower = city.trim().to_lowercase();
        if place_lower.is_empty() {
            return false;
        }

        if !city_lower.is_empty() && place_lower.contains(&city_lower) {
            return true;
        }

        if COMMON_PLACE_TERMS.iter().any(|term| place_lower.contains(term)) {
            return true;
        }

        city_suggestions(city)
            .iter()
            .any(|landmark| landmark.to_lowercase() == place_lower)
    }
}

/// Well-known places for a city, with a generic list for unknown cities
pub fn city_suggestions(city: &str) -> &'static [&'static str] {
    match city.trim().to_lowercase().as_str() {
        "mumbai" => &[
            "Gateway of India",
            "Marine Drive",
            "Juhu Beach",
            "Bandra-Worli Sea Link",
        ],
        "delhi" => &["Red Fort", "India Gate", "Qutub Minar", "Lotus Temple"],
        "bangalore" => &[
            "Cubbon Park",
            "Lalbagh",
            "Vidhana Soudha",
            "Bangalore Palace",
        ],
        "chennai" => &["Marina Beach", "Kapaleeshwarar Temple", "Fort St. George"],
        "pune" => &["Shaniwar Wada", "Aga Khan Palace", "Sinhagad Fort"],
        "ahmedabad" => &[
            "Kankaria Lake",
            "Sabarmati Ashram",
            "Paldi",
            "Navrangpura",
            "Maninagar",
        ],
        _ => &["City Center", "Main Market", "Railway Station", "Bus Stand"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_name_in_place() {
        assert!(KeywordPlaceValidator.validate_place("Pune", "Koregaon Park, Pune"));
        assert!(KeywordPlaceValidator.validate_place("pune", "somewhere in PUNE"));
    }

    #[test]
    fn test_common_terms() {
        assert!(KeywordPlaceValidator.validate_place("Delhi", "New Delhi Railway Station"));
        assert!(KeywordPlaceValidator.validate_place("Jaipur", "MI Road"));
    }

    #[test]
    fn test_landmark() {
        assert!(KeywordPlaceValidator.validate_place("Mumbai", "marine drive"));
        assert!(KeywordPlaceValidator.validate_place("Ahmedabad", "Paldi"));
    }

    #[test]
    fn test_rejects_unknown() {
        assert!(!KeywordPlaceValidator.validate_place("Chennai", "Xyzzy"));
        assert!(!KeywordPlaceValidator.validate_place("Chennai", "   "));
    }

    #[test]
    fn test_suggestions_default() {
        assert_eq!(city_suggestions("Nowhere").len(), 4);
        assert!(city_suggestions("DELHI").contains(&"India Gate"));
    }
}
