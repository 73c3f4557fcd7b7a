//! Reverse-geocoding client.
//!
//! Issues a single GET per lookup and hands the raw result list to the
//! resolver; the precedence logic that picks a display string lives in the
//! core crate, not here.

use crate::error::GeocodeError;
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use wayfare_rs_config::GeocodingConfig;

/// Client seam for turning coordinates into geocoding results.
#[async_trait]
pub trait GeocodeClient: Send + Sync {
    /// Look up the results for a coordinate pair.
    async fn reverse_geocode(&self, lat: f64, lng: f64)
    -> Result<Vec<GeocodeResult>, GeocodeError>;
}

/// One result entry from the geocoding provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResult {
    /// Full display address for the result.
    pub formatted_address: String,
    /// Typed name components, most specific first.
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// A single typed component within a geocoding result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressComponent {
    /// Human-readable component name.
    pub long_name: String,
    /// Provider type tags for the component.
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Deserialize)]
pub(crate) struct GeocodeResponse {
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) results: Vec<GeocodeResult>,
}

/// Reqwest-backed client for a Google-shaped geocoding endpoint.
pub struct GoogleGeocodeClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleGeocodeClient {
    /// Build a client from config. A missing key is tolerated here so the
    /// session can still run in general-recommendations mode; the provider
    /// will reject keyless requests with its own status.
    pub fn new(config: &GeocodingConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl GeocodeClient for GoogleGeocodeClient {
    async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<GeocodeResult>, GeocodeError> {
        let mut query = vec![("latlng".to_string(), format!("{lat},{lng}"))];
        if let Some(key) = &self.api_key {
            query.push(("key".to_string(), key.clone()));
        }

        debug!("sending reverse-geocode request (lat={lat}, lng={lng})");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("geocoding endpoint returned http {status}");
            return Err(GeocodeError::Http { status, body });
        }

        let body: GeocodeResponse = response.json().await?;
        check_results(body)
    }
}

/// Reject non-OK provider statuses and empty result lists.
pub(crate) fn check_results(response: GeocodeResponse) -> Result<Vec<GeocodeResult>, GeocodeError> {
    if response.status != "OK" || response.results.is_empty() {
        return Err(GeocodeError::Provider {
            status: response.status,
        });
    }
    Ok(response.results)
}

#[cfg(test)]
mod tests {
    use super::{GeocodeResponse, check_results};
    use crate::error::GeocodeError;
    use pretty_assertions::assert_eq;

    fn parse(raw: &str) -> GeocodeResponse {
        serde_json::from_str(raw).expect("response json")
    }

    #[test]
    fn ok_status_with_results_passes_through() {
        let response = parse(
            r#"{"status": "OK", "results": [{
                "formatted_address": "Champ de Mars, Paris, France",
                "address_components": [
                    {"long_name": "Paris", "types": ["locality", "political"]}
                ]
            }]}"#,
        );
        let results = check_results(response).expect("results");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].address_components[0].long_name, "Paris");
    }

    #[test]
    fn zero_results_is_a_provider_error() {
        let response = parse(r#"{"status": "ZERO_RESULTS", "results": []}"#);
        match check_results(response) {
            Err(GeocodeError::Provider { status }) => assert_eq!(status, "ZERO_RESULTS"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn ok_status_with_no_results_is_a_provider_error() {
        let response = parse(r#"{"status": "OK", "results": []}"#);
        assert!(matches!(
            check_results(response),
            Err(GeocodeError::Provider { .. })
        ));
    }
}
