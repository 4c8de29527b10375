use super::prelude::*;

/// A lookup request: the owning user plus optional locality filters.
#[derive(Debug, Clone, Default)]
pub struct AddressSearch {
    pub user_id: String,
    pub suburb: Option<String>,
    pub postcode: Option<String>,
}

pub fn find_addresses<R: AddressRepo>(
    repo: &R,
    search: AddressSearch,
) -> Result<Vec<AddressRecord>> {
    if search.user_id.is_empty() {
        return Err(Error::MissingUserId);
    }
    let query = address_query(search);
    let records = repo.query_addresses(&query)?;
    if records.is_empty() {
        return Err(Error::AddressNotFound);
    }
    Ok(records)
}

/// Build the partition query for a search.
///
/// Reads are strongly consistent. A locality filter is only attached
/// when the caller supplied a non-empty suburb or postcode; the other
/// leg then defaults to the empty string, so it matches nothing unless
/// a record's own field is empty.
pub fn address_query(search: AddressSearch) -> AddressQuery {
    let AddressSearch {
        user_id,
        suburb,
        postcode,
    } = search;
    let suburb = suburb.unwrap_or_default();
    let postcode = postcode.unwrap_or_default();
    let filter = if suburb.is_empty() && postcode.is_empty() {
        None
    } else {
        Some(LocalityFilter { suburb, postcode })
    };
    AddressQuery {
        user_id,
        consistent_read: true,
        filter,
    }
}
