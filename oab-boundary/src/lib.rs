use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A stored address as it appears on the wire.
///
/// The `country` field is omitted entirely when it was never resolved.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AddressRecord {
    pub id       : String,
    #[serde(rename = "userId")]
    pub user_id  : String,
    pub line     : String,
    pub suburb   : String,
    pub state    : String,
    pub postcode : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country  : Option<String>,
}

/// Address fields of a creation request. Absent fields deserialize to
/// empty strings, mirroring the presence checks of the validation rules.
#[rustfmt::skip]
#[derive(Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct AddressFields {
    #[serde(default)]
    pub line     : String,
    #[serde(default)]
    pub suburb   : String,
    #[serde(default)]
    pub state    : String,
    #[serde(default)]
    pub postcode : String,
    pub country  : Option<String>,
}

/// A caller-submitted address: free text for the geocoder, a structured
/// field set, or anything else (which no validation mode accepts).
#[derive(Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum RawAddress {
    Text(String),
    Fields(AddressFields),
    Other(serde_json::Value),
}

#[derive(Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CreateAddressRequest {
    #[serde(default, rename = "userId")]
    pub user_id: String,
    pub address: Option<RawAddress>,
}

#[derive(Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct FindAddressRequest {
    #[serde(default, rename = "userId")]
    pub user_id: String,
    /// Optional locality selector. Deliberately untyped: any shape that
    /// does not carry usable `suburb`/`postcode` strings degrades to an
    /// unfiltered lookup instead of an error.
    pub address: Option<serde_json::Value>,
}

/// Response payload with a single human-readable message. Used for both
/// confirmations and failures.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResponseMessage {
    pub message: String,
}

impl From<&str> for ResponseMessage {
    fn from(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}
