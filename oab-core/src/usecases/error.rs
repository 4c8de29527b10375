use crate::{gateways::geocode::GeocodingError, repositories};
use thiserror::Error;

// The display strings double as the user-visible response messages.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing request body")]
    MissingBody,
    #[error("Missing necessary request body")]
    IncompleteRequest,
    #[error("Missing necessary request body: userId")]
    MissingUserId,
    #[error("Unable to find the address")]
    UnverifiableAddress,
    #[error("Address not found")]
    AddressNotFound,
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
