use crate::{address::Address, id::Id};

/// A stored address owned by a user.
///
/// The partition key of the store is `user_id`, the unique sort key is
/// `id`. A user may own any number of records; records are created once
/// and never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub id: Id,
    pub user_id: String,
    pub address: Address,
}
