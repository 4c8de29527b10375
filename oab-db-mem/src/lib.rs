//! In-memory implementation of the address store.
//!
//! Stands in for the managed partitioned key-value collaborator:
//! records are grouped by `user_id` (the partition key) and unique by
//! `id`. All readers and writers share a single lock, so a query always
//! observes prior writes and the `consistent_read` flag is honored by
//! construction.

use std::{collections::HashMap, sync::Arc};

use oab_core::{
    entities::*,
    repositories::{AddressQuery, AddressRepo, Error},
};
use parking_lot::RwLock;

type Result<T> = std::result::Result<T, Error>;
type Partitions = HashMap<String, Vec<AddressRecord>>;

#[derive(Debug, Default, Clone)]
pub struct Connections {
    partitions: Arc<RwLock<Partitions>>,
}

impl Connections {
    pub fn init() -> Self {
        Self::default()
    }
}

impl AddressRepo for Connections {
    fn create_address(&self, record: &AddressRecord) -> Result<()> {
        let mut partitions = self.partitions.write();
        let partition = partitions.entry(record.user_id.clone()).or_default();
        if partition.iter().any(|r| r.id == record.id) {
            return Err(Error::AlreadyExists);
        }
        partition.push(record.clone());
        Ok(())
    }

    fn query_addresses(&self, query: &AddressQuery) -> Result<Vec<AddressRecord>> {
        let partitions = self.partitions.read();
        let Some(partition) = partitions.get(&query.user_id) else {
            return Ok(vec![]);
        };
        Ok(partition
            .iter()
            .filter(|record| {
                query
                    .filter
                    .as_ref()
                    .map_or(true, |f| f.matches(&record.address))
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oab_core::repositories::LocalityFilter;

    fn record(user_id: &str, suburb: &str, postcode: &str) -> AddressRecord {
        AddressRecord {
            id: Id::new(),
            user_id: user_id.into(),
            address: Address {
                line: "1 Example Rd".into(),
                suburb: suburb.into(),
                state: "VIC".into(),
                postcode: postcode.into(),
                country: String::new(),
            },
        }
    }

    fn query(user_id: &str, filter: Option<LocalityFilter>) -> AddressQuery {
        AddressQuery {
            user_id: user_id.into(),
            consistent_read: true,
            filter,
        }
    }

    #[test]
    fn partitions_are_isolated_by_user() {
        let db = Connections::init();
        db.create_address(&record("001", "Carlton", "3053")).unwrap();
        db.create_address(&record("002", "Carlton", "3053")).unwrap();
        let records = db.query_addresses(&query("001", None)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "001");
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let db = Connections::init();
        let r = record("001", "Carlton", "3053");
        db.create_address(&r).unwrap();
        assert!(matches!(
            db.create_address(&r),
            Err(Error::AlreadyExists)
        ));
    }

    #[test]
    fn same_user_may_own_many_addresses() {
        let db = Connections::init();
        db.create_address(&record("001", "Carlton", "3053")).unwrap();
        db.create_address(&record("001", "Fitzroy", "3065")).unwrap();
        assert_eq!(db.query_addresses(&query("001", None)).unwrap().len(), 2);
    }

    #[test]
    fn filter_keeps_records_matching_either_leg() {
        let db = Connections::init();
        db.create_address(&record("001", "Carlton", "3053")).unwrap();
        db.create_address(&record("001", "Fitzroy", "3065")).unwrap();
        let filter = LocalityFilter {
            suburb: "Carlton".into(),
            postcode: String::new(),
        };
        let records = db.query_addresses(&query("001", Some(filter))).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].address.suburb, "Carlton");
    }

    #[test]
    fn unknown_partition_yields_no_records() {
        let db = Connections::init();
        assert!(db.query_addresses(&query("nobody", None)).unwrap().is_empty());
    }

    #[test]
    fn clones_share_the_same_store() {
        let db = Connections::init();
        let other = db.clone();
        db.create_address(&record("001", "Carlton", "3053")).unwrap();
        assert_eq!(other.query_addresses(&query("001", None)).unwrap().len(), 1);
    }
}
