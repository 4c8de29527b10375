use super::prelude::*;

/// A caller's submission: the owning user and the address to store.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub user_id: String,
    pub address: Option<RawAddress>,
}

/// Store the submitted address verbatim ("trust the input").
///
/// All four address fields are required; partial addresses are rejected.
/// Every successful call persists a new record with a fresh id, repeated
/// identical submissions included.
pub fn create_address<R: AddressRepo>(repo: &R, new: NewAddress) -> Result<AddressRecord> {
    let NewAddress { user_id, address } = new;
    let Some(RawAddress::Partial(address)) = address else {
        return Err(Error::IncompleteRequest);
    };
    if user_id.is_empty() || !address.is_complete() {
        return Err(Error::IncompleteRequest);
    }
    let record = AddressRecord {
        id: Id::new(),
        user_id,
        address,
    };
    log::debug!(
        "Creating address {} for user {}",
        record.id,
        record.user_id
    );
    repo.create_address(&record)?;
    Ok(record)
}

/// Store the submitted address after verifying it with the geocoding
/// gateway ("verify via provider").
///
/// The raw address may be free text or structured fields; both are
/// passed through to the gateway. An unresolved result is rejected,
/// while a gateway communication failure propagates as an error.
pub fn create_verified_address<R, G>(
    repo: &R,
    geocoder: &G,
    new: NewAddress,
) -> Result<AddressRecord>
where
    R: AddressRepo,
    G: GeocodingGateway + ?Sized,
{
    let NewAddress { user_id, address } = new;
    let Some(raw) = address else {
        return Err(Error::IncompleteRequest);
    };
    if user_id.is_empty() || raw.is_empty() {
        return Err(Error::IncompleteRequest);
    }
    let resolved = geocoder.resolve_address(&raw)?;
    if resolved.is_unresolved() {
        return Err(Error::UnverifiableAddress);
    }
    let record = AddressRecord {
        id: Id::new(),
        user_id,
        address: resolved,
    };
    log::debug!(
        "Creating verified address {} for user {}",
        record.id,
        record.user_id
    );
    repo.create_address(&record)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{complete_address, BrokenGeoGw, MockDb, VerifyingGeoGw},
        *,
    };

    fn new_address(user_id: &str, address: Option<RawAddress>) -> NewAddress {
        NewAddress {
            user_id: user_id.into(),
            address,
        }
    }

    #[test]
    fn create_with_complete_address() {
        let db = MockDb::default();
        let address = complete_address();
        let record = create_address(
            &db,
            new_address("003", Some(RawAddress::Partial(address.clone()))),
        )
        .unwrap();
        assert!(record.id.is_valid());
        assert_eq!(record.user_id, "003");
        assert_eq!(record.address, address);
        assert_eq!(*db.addresses.borrow(), vec![record]);
    }

    #[test]
    fn repeated_submissions_create_distinct_records() {
        let db = MockDb::default();
        let new = || new_address("003", Some(RawAddress::Partial(complete_address())));
        let first = create_address(&db, new()).unwrap();
        let second = create_address(&db, new()).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(db.addresses.borrow().len(), 2);
    }

    #[test]
    fn create_with_missing_field_is_rejected() {
        let blank = |f: fn(&mut Address)| {
            let mut address = complete_address();
            f(&mut address);
            address
        };
        let incomplete = vec![
            blank(|a| a.line.clear()),
            blank(|a| a.suburb.clear()),
            blank(|a| a.state.clear()),
            blank(|a| a.postcode.clear()),
        ];
        for address in incomplete {
            let db = MockDb::default();
            let res = create_address(&db, new_address("003", Some(RawAddress::Partial(address))));
            assert!(matches!(res, Err(Error::IncompleteRequest)));
            assert!(db.addresses.borrow().is_empty());
        }
    }

    #[test]
    fn create_without_user_id_is_rejected() {
        let db = MockDb::default();
        let res = create_address(
            &db,
            new_address("", Some(RawAddress::Partial(complete_address()))),
        );
        assert!(matches!(res, Err(Error::IncompleteRequest)));
        assert!(db.addresses.borrow().is_empty());
    }

    #[test]
    fn create_without_address_is_rejected() {
        let db = MockDb::default();
        let res = create_address(&db, new_address("003", None));
        assert!(matches!(res, Err(Error::IncompleteRequest)));
    }

    #[test]
    fn create_with_text_address_requires_verification() {
        // The direct path has no geocoder and cannot accept free text.
        let db = MockDb::default();
        let res = create_address(
            &db,
            new_address("003", Some(RawAddress::Text("456 Like St".into()))),
        );
        assert!(matches!(res, Err(Error::IncompleteRequest)));
    }

    #[test]
    fn verified_create_persists_resolved_fields() {
        let db = MockDb::default();
        let resolved = complete_address();
        let geocoder = VerifyingGeoGw(resolved.clone());
        let record = create_verified_address(
            &db,
            &geocoder,
            new_address("003", Some(RawAddress::Text("456 like st hawthorn".into()))),
        )
        .unwrap();
        assert_eq!(record.address, resolved);
        assert_eq!(db.addresses.borrow().len(), 1);
    }

    #[test]
    fn verified_create_rejects_unresolved_address() {
        let db = MockDb::default();
        let geocoder = VerifyingGeoGw(Address::default());
        let res = create_verified_address(
            &db,
            &geocoder,
            new_address("003", Some(RawAddress::Text("nowhere".into()))),
        );
        assert!(matches!(res, Err(Error::UnverifiableAddress)));
        assert!(db.addresses.borrow().is_empty());
    }

    #[test]
    fn verified_create_propagates_gateway_failures() {
        let db = MockDb::default();
        let res = create_verified_address(
            &db,
            &BrokenGeoGw,
            new_address("003", Some(RawAddress::Text("456 Like St".into()))),
        );
        assert!(matches!(
            res,
            Err(Error::Geocoding(GeocodingError::Failure(_)))
        ));
        assert!(db.addresses.borrow().is_empty());
    }

    #[test]
    fn verified_create_requires_nonempty_address() {
        let db = MockDb::default();
        let geocoder = VerifyingGeoGw(complete_address());
        let res = create_verified_address(
            &db,
            &geocoder,
            new_address("003", Some(RawAddress::Text(String::new()))),
        );
        assert!(matches!(res, Err(Error::IncompleteRequest)));
    }
}
