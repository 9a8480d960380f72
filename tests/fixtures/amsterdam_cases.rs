//! Real Amsterdam street addresses for realistic test fixtures.
//!
//! Coordinates are approximate building positions across the city. The
//! exact values are not load-bearing; they only need to be stable and
//! mutually consistent so that distance-based assertions hold.

use itinerary_planner::geo::LatLng;
use itinerary_planner::model::{Address, Case, CaseId};

/// A named address with coordinates.
#[derive(Debug, Clone)]
pub struct Spot {
    pub street_name: &'static str,
    pub number: &'static str,
    pub postal_code: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Spot {
    pub const fn new(
        street_name: &'static str,
        number: &'static str,
        postal_code: &'static str,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            street_name,
            number,
            postal_code,
            lat,
            lng,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Dam square, the conventional city-center fallback.
pub const CITY_CENTER: LatLng = LatLng::new(52.3731, 4.8932);

// ============================================================================
// Centrum (postal districts 1011-1018)
// ============================================================================

pub const CENTRUM_SPOTS: &[Spot] = &[
    Spot::new("Warmoesstraat", "67", "1012HX", 52.3739, 4.8963),
    Spot::new("Zeedijk", "43", "1012AR", 52.3744, 4.9005),
    Spot::new("Nieuwmarkt", "12", "1012CR", 52.3723, 4.9003),
    Spot::new("Oudezijds Achterburgwal", "130", "1012DT", 52.3716, 4.8983),
    Spot::new("Spuistraat", "210", "1012VT", 52.3718, 4.8896),
    Spot::new("Herengracht", "341", "1016AZ", 52.3682, 4.8873),
    Spot::new("Keizersgracht", "508", "1017EJ", 52.3654, 4.8883),
    Spot::new("Reguliersdwarsstraat", "38", "1017BM", 52.3662, 4.8930),
];

// ============================================================================
// De Pijp (1072-1074)
// ============================================================================

pub const DE_PIJP_SPOTS: &[Spot] = &[
    Spot::new("Albert Cuypstraat", "112", "1072CZ", 52.3557, 4.8924),
    Spot::new("Ferdinand Bolstraat", "68", "1072LM", 52.3551, 4.8915),
    Spot::new("Gerard Doustraat", "78", "1072VV", 52.3562, 4.8908),
    Spot::new("Van Woustraat", "105", "1074AG", 52.3541, 4.8990),
    Spot::new("Ceintuurbaan", "282", "1072GK", 52.3540, 4.8960),
    Spot::new("Sarphatipark", "4", "1072PA", 52.3549, 4.8965),
];

// ============================================================================
// Oost (1091-1098)
// ============================================================================

pub const OOST_SPOTS: &[Spot] = &[
    Spot::new("Wibautstraat", "115", "1091GL", 52.3532, 4.9115),
    Spot::new("Linnaeusstraat", "52", "1092CM", 52.3566, 4.9249),
    Spot::new("Javastraat", "23", "1094GZ", 52.3645, 4.9361),
    Spot::new("Eerste Oosterparkstraat", "88", "1091HA", 52.3570, 4.9142),
    Spot::new("Beukenplein", "18", "1092BA", 52.3555, 4.9200),
    Spot::new("Middenweg", "57", "1098AD", 52.3495, 4.9334),
];

// ============================================================================
// West (1052-1057)
// ============================================================================

pub const WEST_SPOTS: &[Spot] = &[
    Spot::new("Kinkerstraat", "146", "1053ED", 52.3672, 4.8680),
    Spot::new("De Clercqstraat", "44", "1052NH", 52.3707, 4.8702),
    Spot::new("Jan Evertsenstraat", "80", "1056EC", 52.3705, 4.8555),
    Spot::new("Admiraal de Ruijterweg", "151", "1056EZ", 52.3744, 4.8533),
    Spot::new("Bos en Lommerweg", "218", "1055EK", 52.3802, 4.8475),
    Spot::new("Overtoom", "301", "1054JL", 52.3600, 4.8655),
];

// ============================================================================
// Noord (1021-1035)
// ============================================================================

pub const NOORD_SPOTS: &[Spot] = &[
    Spot::new("Van der Pekstraat", "39", "1031CS", 52.3889, 4.9071),
    Spot::new("Meeuwenlaan", "98", "1021JL", 52.3865, 4.9190),
    Spot::new("Buikslotermeerplein", "120", "1025ET", 52.4006, 4.9337),
];

// ============================================================================
// Builders
// ============================================================================

/// Builds a case at the given spot with no fraud or priority signal.
pub fn case_from(spot: &Spot, id: u64) -> Case {
    Case::new(
        CaseId::from(id),
        Address::new(spot.street_name, spot.number, spot.postal_code),
        spot.position(),
    )
}

/// Builds a pool from spots, ids assigned 1..=len in order.
pub fn pool_from(spots: &[Spot]) -> Vec<Case> {
    spots
        .iter()
        .enumerate()
        .map(|(index, spot)| case_from(spot, index as u64 + 1))
        .collect()
}

/// All areas combined, ids assigned in order.
pub fn city_pool() -> Vec<Case> {
    let mut spots: Vec<Spot> = Vec::with_capacity(30);
    spots.extend_from_slice(CENTRUM_SPOTS);
    spots.extend_from_slice(DE_PIJP_SPOTS);
    spots.extend_from_slice(OOST_SPOTS);
    spots.extend_from_slice(WEST_SPOTS);
    spots.extend_from_slice(NOORD_SPOTS);
    pool_from(&spots)
}

/// Cases for several units of one building: same street and number,
/// co-located, consecutive ids starting at `first_id`.
pub fn units_at(spot: &Spot, count: usize, first_id: u64) -> Vec<Case> {
    (0..count)
        .map(|offset| case_from(spot, first_id + offset as u64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_city_pool_ids_are_unique() {
        let pool = city_pool();
        let ids: HashSet<String> = pool.iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids.len(), pool.len());
    }

    #[test]
    fn test_coordinates_in_amsterdam_area() {
        for case in city_pool() {
            assert!(
                case.position.lat > 52.28 && case.position.lat < 52.43,
                "{} lat out of range: {}",
                case.address.street_name,
                case.position.lat
            );
            assert!(
                case.position.lng > 4.75 && case.position.lng < 5.03,
                "{} lng out of range: {}",
                case.address.street_name,
                case.position.lng
            );
        }
    }

    #[test]
    fn test_units_share_an_address() {
        let units = units_at(&OOST_SPOTS[0], 3, 100);
        assert!(units[0].address.same_address(&units[1].address));
        assert!(units[1].address.same_address(&units[2].address));
        assert_ne!(units[0].id, units[1].id);
    }
}
