//! Address resolution from raw geocoding results.
//!
//! Turns a provider result list into a `Location` with the most specific
//! display string available. The precedence chain is a strict top-to-bottom
//! fallback: point of interest, premise, street, city and country, raw
//! formatted address.

use crate::types::Location;
use log::debug;
use wayfare_rs_providers::GeocodeResult;

/// Component fields pulled out of a result list.
#[derive(Debug, Default)]
struct Components {
    poi: Option<String>,
    premise: Option<String>,
    street_number: Option<String>,
    route: Option<String>,
    sublocality: Option<String>,
    city: Option<String>,
    country: Option<String>,
}

/// Find a component's long name by type tag within one result.
fn component(result: &GeocodeResult, type_name: &str) -> Option<String> {
    result
        .address_components
        .iter()
        .find(|component| component.types.iter().any(|t| t == type_name))
        .map(|component| component.long_name.clone())
}

/// Sublocality tags come in leveled variants; accept any of them.
fn sublocality(result: &GeocodeResult) -> Option<String> {
    result
        .address_components
        .iter()
        .find(|component| component.types.iter().any(|t| t.starts_with("sublocality")))
        .map(|component| component.long_name.clone())
}

fn scan(results: &[GeocodeResult]) -> Components {
    let first = &results[0];
    let mut components = Components {
        poi: component(first, "point_of_interest"),
        premise: component(first, "premise"),
        street_number: component(first, "street_number"),
        route: component(first, "route"),
        sublocality: sublocality(first),
        city: component(first, "locality")
            .or_else(|| component(first, "administrative_area_level_1")),
        country: component(first, "country"),
    };

    // The most specific names often live in a later result when the first
    // entry is a plain street address.
    if components.poi.is_none() && components.premise.is_none() {
        for result in &results[1..] {
            if components.poi.is_none() {
                components.poi = component(result, "point_of_interest");
            }
            if components.premise.is_none() {
                components.premise = component(result, "premise");
            }
            if components.poi.is_some() || components.premise.is_some() {
                break;
            }
        }
    }

    components
}

/// Build a `Location` from a non-empty geocoding result list.
///
/// Callers guarantee `results` is non-empty; the provider client rejects
/// empty lists before this point.
pub fn resolve_location(results: &[GeocodeResult], lat: f64, lng: f64) -> Location {
    let components = scan(results);
    let area_suffix = components
        .sublocality
        .clone()
        .or_else(|| components.city.clone());

    let precise = if let Some(poi) = &components.poi {
        match &area_suffix {
            Some(area) => format!("{poi}, {area}"),
            None => poi.clone(),
        }
    } else if let Some(premise) = &components.premise {
        let mut parts = vec![premise.clone()];
        if let (Some(number), Some(route)) = (&components.street_number, &components.route) {
            parts.push(format!("{number} {route}"));
        }
        if let Some(area) = &area_suffix {
            parts.push(area.clone());
        }
        parts.join(", ")
    } else if let (Some(number), Some(route)) = (&components.street_number, &components.route) {
        match &area_suffix {
            Some(area) => format!("{number} {route}, {area}"),
            None => format!("{number} {route}"),
        }
    } else if let (Some(city), Some(country)) = (&components.city, &components.country) {
        format!("{city}, {country}")
    } else {
        results[0].formatted_address.clone()
    };

    debug!("resolved location (lat={lat}, lng={lng}, precise={precise})");
    Location {
        lat: Some(lat),
        lng: Some(lng),
        city: components.city,
        country: components.country,
        formatted_address: Some(results[0].formatted_address.clone()),
        precise_location_string: Some(precise),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_location;
    use pretty_assertions::assert_eq;
    use wayfare_rs_providers::{AddressComponent, GeocodeResult};

    fn component(long_name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent {
            long_name: long_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn result(formatted: &str, components: Vec<AddressComponent>) -> GeocodeResult {
        GeocodeResult {
            formatted_address: formatted.to_string(),
            address_components: components,
        }
    }

    #[test]
    fn point_of_interest_wins_over_premise() {
        let results = vec![result(
            "Champ de Mars, 75007 Paris, France",
            vec![
                component("Eiffel Tower", &["point_of_interest"]),
                component("Champ de Mars", &["premise"]),
                component("Paris", &["locality"]),
            ],
        )];
        let location = resolve_location(&results, 48.8584, 2.2945);
        assert_eq!(
            location.precise_location_string.as_deref(),
            Some("Eiffel Tower, Paris")
        );
    }

    #[test]
    fn premise_includes_street_and_area() {
        let results = vec![result(
            "1600 Amphitheatre Pkwy, Mountain View, CA, USA",
            vec![
                component("Googleplex", &["premise"]),
                component("1600", &["street_number"]),
                component("Amphitheatre Parkway", &["route"]),
                component("Mountain View", &["locality"]),
                component("United States", &["country"]),
            ],
        )];
        let location = resolve_location(&results, 37.422, -122.084);
        assert_eq!(
            location.precise_location_string.as_deref(),
            Some("Googleplex, 1600 Amphitheatre Parkway, Mountain View")
        );
    }

    #[test]
    fn street_address_falls_back_when_no_named_place() {
        let results = vec![result(
            "221B Baker St, London, UK",
            vec![
                component("221B", &["street_number"]),
                component("Baker Street", &["route"]),
                component("Marylebone", &["sublocality_level_1", "sublocality"]),
                component("London", &["locality"]),
            ],
        )];
        let location = resolve_location(&results, 51.5238, -0.1586);
        assert_eq!(
            location.precise_location_string.as_deref(),
            Some("221B Baker Street, Marylebone")
        );
    }

    #[test]
    fn city_and_country_when_nothing_more_specific() {
        let results = vec![result(
            "Lisbon, Portugal",
            vec![
                component("Lisbon", &["locality"]),
                component("Portugal", &["country"]),
            ],
        )];
        let location = resolve_location(&results, 38.7223, -9.1393);
        assert_eq!(
            location.precise_location_string.as_deref(),
            Some("Lisbon, Portugal")
        );
        assert_eq!(location.city.as_deref(), Some("Lisbon"));
        assert_eq!(location.country.as_deref(), Some("Portugal"));
    }

    #[test]
    fn formatted_address_is_the_last_resort() {
        let results = vec![result("Somewhere in the Atlantic Ocean", vec![])];
        let location = resolve_location(&results, 0.0, -30.0);
        assert_eq!(
            location.precise_location_string.as_deref(),
            Some("Somewhere in the Atlantic Ocean")
        );
    }

    #[test]
    fn later_results_are_scanned_for_named_places() {
        let results = vec![
            result(
                "5 Avenue Anatole France, Paris, France",
                vec![
                    component("5", &["street_number"]),
                    component("Avenue Anatole France", &["route"]),
                    component("Paris", &["locality"]),
                ],
            ),
            result(
                "Eiffel Tower, Paris, France",
                vec![component("Eiffel Tower", &["point_of_interest"])],
            ),
        ];
        let location = resolve_location(&results, 48.8584, 2.2945);
        assert_eq!(
            location.precise_location_string.as_deref(),
            Some("Eiffel Tower, Paris")
        );
    }

    #[test]
    fn administrative_area_stands_in_for_a_missing_city() {
        let results = vec![result(
            "Yellowstone National Park, WY, USA",
            vec![
                component("Wyoming", &["administrative_area_level_1"]),
                component("United States", &["country"]),
            ],
        )];
        let location = resolve_location(&results, 44.428, -110.5885);
        assert_eq!(
            location.precise_location_string.as_deref(),
            Some("Wyoming, United States")
        );
    }
}
