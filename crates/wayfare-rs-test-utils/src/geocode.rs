use async_trait::async_trait;
use wayfare_rs_providers::{AddressComponent, GeocodeClient, GeocodeError, GeocodeResult};

/// Result list for a well-known landmark, handy for precedence tests.
pub fn eiffel_tower_results() -> Vec<GeocodeResult> {
    vec![GeocodeResult {
        formatted_address: "Champ de Mars, 5 Av. Anatole France, 75007 Paris, France".to_string(),
        address_components: vec![
            AddressComponent {
                long_name: "Eiffel Tower".to_string(),
                types: vec!["point_of_interest".to_string()],
            },
            AddressComponent {
                long_name: "Champ de Mars".to_string(),
                types: vec!["premise".to_string()],
            },
            AddressComponent {
                long_name: "Paris".to_string(),
                types: vec!["locality".to_string(), "political".to_string()],
            },
            AddressComponent {
                long_name: "France".to_string(),
                types: vec!["country".to_string(), "political".to_string()],
            },
        ],
    }]
}

/// Geocoder that always returns the same result list.
#[derive(Debug, Clone)]
pub struct FixedGeocoder {
    results: Vec<GeocodeResult>,
}

impl FixedGeocoder {
    pub fn new(results: Vec<GeocodeResult>) -> Self {
        Self { results }
    }
}

#[async_trait]
impl GeocodeClient for FixedGeocoder {
    async fn reverse_geocode(
        &self,
        _lat: f64,
        _lng: f64,
    ) -> Result<Vec<GeocodeResult>, GeocodeError> {
        Ok(self.results.clone())
    }
}

/// Geocoder that reports zero results for every lookup.
#[derive(Debug, Clone, Default)]
pub struct EmptyGeocoder;

#[async_trait]
impl GeocodeClient for EmptyGeocoder {
    async fn reverse_geocode(
        &self,
        _lat: f64,
        _lng: f64,
    ) -> Result<Vec<GeocodeResult>, GeocodeError> {
        Err(GeocodeError::Provider {
            status: "ZERO_RESULTS".to_string(),
        })
    }
}

/// Geocoder that always fails at the transport level.
#[derive(Debug, Clone, Default)]
pub struct FailingGeocoder;

#[async_trait]
impl GeocodeClient for FailingGeocoder {
    async fn reverse_geocode(
        &self,
        _lat: f64,
        _lng: f64,
    ) -> Result<Vec<GeocodeResult>, GeocodeError> {
        Err(GeocodeError::Http {
            status: 500,
            body: "internal error".to_string(),
        })
    }
}
