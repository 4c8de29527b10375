// Low-level storage access traits.
// The store is a partitioned key-value collection: all records of one
// user live in the partition keyed by `user_id` and are unique by `id`.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Secondary filter applied to records already selected by partition key.
///
/// Both legs are always compared once a filter is present. A leg the
/// caller did not supply holds the empty string and therefore only
/// matches records whose own field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalityFilter {
    pub suburb: String,
    pub postcode: String,
}

impl LocalityFilter {
    pub fn matches(&self, address: &Address) -> bool {
        address.suburb == self.suburb || address.postcode == self.postcode
    }
}

/// A lookup within a single user's partition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    pub user_id: String,
    /// The read must observe all writes committed before it began.
    pub consistent_read: bool,
    pub filter: Option<LocalityFilter>,
}

pub trait AddressRepo {
    /// Insert only; an existing (`user_id`, `id`) key is never updated.
    fn create_address(&self, record: &AddressRecord) -> Result<()>;

    fn query_addresses(&self, query: &AddressQuery) -> Result<Vec<AddressRecord>>;
}
