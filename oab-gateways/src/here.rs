use oab_core::gateways::geocode::{GeocodingError, GeocodingGateway};
use oab_entities::address::{Address, RawAddress};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

const DEFAULT_URL: &str = "https://maps.here.com/api/v1";
const FALLBACK_API_KEY: &str = "YOUR_HERE_MAP_API_KEY";

/// Here Maps geocoding.
///
/// The provider answers with a full address string plus an ordered list
/// of typed components from which the canonical fields are extracted.
#[derive(Debug)]
pub struct HereMaps {
    url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl HereMaps {
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

impl GeocodingGateway for HereMaps {
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
        let response: HereMapsResponse = response
            .json()
            .map_err(|err| GeocodingError::Unreachable(err.into()))?;
        Ok(address_from_components(&response.address_components))
    }
}

#[derive(Debug, Default, Deserialize)]
struct HereMapsResponse {
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Default, Deserialize)]
struct AddressComponent {
    #[serde(default)]
    long_name: String,
    #[serde(default)]
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}

/// Extract the canonical fields from the ordered component list.
///
/// The first component carrying a given type wins. A missing or empty
/// list leaves every field empty: the address is unresolved, which is
/// not a provider failure.
fn address_from_components(components: &[AddressComponent]) -> Address {
    let first = |ty: &str| {
        components
            .iter()
            .find(|c| c.types.iter().any(|t| t == ty))
    };
    let long = |ty: &str| first(ty).map(|c| c.long_name.clone()).unwrap_or_default();
    let short = |ty: &str| first(ty).map(|c| c.short_name.clone()).unwrap_or_default();
    Address {
        line: long("address"),
        suburb: long("locality"),
        state: short("administrative_area_level_1"),
        postcode: short("postcode"),
        country: String::new(),
    }
}
