//! Geocoding provider adapters.
//!
//! Each provider implements the capability contract from
//! [`oab_core::gateways::geocode`] but parses its own response shape.

use oab_entities::address::RawAddress;

pub mod google;
pub mod here;

/// The request payload sent to a provider: the caller's submission,
/// passed through as-is.
fn request_payload(raw: &RawAddress) -> serde_json::Value {
    match raw {
        RawAddress::Text(text) => serde_json::json!({ "address": text }),
        RawAddress::Partial(address) => serde_json::json!({
            "address": address.line,
            "suburb": address.suburb,
            "state": address.state,
            "postcode": address.postcode,
        }),
    }
}
