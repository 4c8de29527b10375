use oab_entities::address::{Address, RawAddress};
use thiserror::Error;

/// Communication with a geocoding provider failed.
///
/// Distinct from an *unresolved* address: a provider that answers
/// successfully but does not know the submitted address yields an empty
/// [`Address`], not an error.
#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("The geocoding provider could not be reached: {0}")]
    Unreachable(#[source] anyhow::Error),
    #[error("The geocoding provider rejected the request (status {0})")]
    Failure(u16),
}

pub trait GeocodingGateway {
    /// Resolve a caller-submitted address into canonical fields.
    ///
    /// The caller decides whether an unresolved (empty) result is an
    /// error condition.
    fn resolve_address(&self, raw: &RawAddress) -> Result<Address, GeocodingError>;
}
