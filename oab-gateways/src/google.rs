use oab_core::gateways::geocode::{GeocodingError, GeocodingGateway};
use oab_entities::address::{Address, RawAddress};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

const DEFAULT_URL: &str = "https://maps.google.com/api/v1";
const FALLBACK_API_KEY: &str = "YOUR_GOOGLE_API_KEY";

/// Google Maps geocoding.
///
/// The provider answers with the flat canonical fields; the country is
/// always Australia.
#[derive(Debug)]
pub struct GoogleMaps {
    url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl GoogleMaps {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            url: DEFAULT_URL.into(),
            api_key,
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Override the default provider endpoint (used by tests).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl GeocodingGateway for GoogleMaps {
    fn resolve_address(&self, raw: &RawAddress) -> Result<Address, GeocodingError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(self.api_key.as_deref().unwrap_or(FALLBACK_API_KEY))
            .json(&crate::request_payload(raw))
            .send()
            .map_err(|err| GeocodingError::Unreachable(err.into()))?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("Geocoding request rejected with status {status}");
            return Err(GeocodingError::Failure(status.as_u16()));
        }
        let response: GoogleMapsResponse = response
            .json()
            .map_err(|err| GeocodingError::Unreachable(err.into()))?;
        Ok(response.into())
    }
}

#[derive(Debug, Default, Deserialize)]
struct GoogleMapsResponse {
    #[serde(default)]
    address: String,
    #[serde(default)]
    suburb: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    postcode: String,
}

impl From<GoogleMapsResponse> for Address {
    fn from(from: GoogleMapsResponse) -> Self {
        let GoogleMapsResponse {
            address,
            suburb,
            state,
            postcode,
        } = from;
        Self {
            line: address,
            suburb,
            state,
            postcode,
            country: "Australia".into(),
        }
    }
}
