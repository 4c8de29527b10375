use super::*;
use oab_entities as e;

impl From<e::record::AddressRecord> for AddressRecord {
    fn from(from: e::record::AddressRecord) -> Self {
        let e::record::AddressRecord {
            id,
            user_id,
            address,
        } = from;
        let e::address::Address {
            line,
            suburb,
            state,
            postcode,
            country,
        } = address;
        Self {
            id: id.into(),
            user_id,
            line,
            suburb,
            state,
            postcode,
            country: (!country.is_empty()).then_some(country),
        }
    }
}

impl From<AddressFields> for e::address::Address {
    fn from(from: AddressFields) -> Self {
        let AddressFields {
            line,
            suburb,
            state,
            postcode,
            country,
        } = from;
        Self {
            line,
            suburb,
            state,
            postcode,
            country: country.unwrap_or_default(),
        }
    }
}

impl From<RawAddress> for e::address::RawAddress {
    fn from(from: RawAddress) -> Self {
        match from {
            RawAddress::Text(text) => Self::Text(text),
            RawAddress::Fields(fields) => Self::Partial(fields.into()),
            // Shapes that carry no usable fields end up empty and are
            // rejected by the validation of both creation modes.
            RawAddress::Other(_) => Self::Partial(Default::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_country_is_omitted_on_the_wire() {
        let record = e::record::AddressRecord {
            id: e::id::Id::new(),
            user_id: "003".into(),
            address: e::address::Address {
                line: "456 Like St".into(),
                suburb: "Hawthorn East".into(),
                state: "VIC".into(),
                postcode: "3123".into(),
                country: String::new(),
            },
        };
        let json = serde_json::to_value(AddressRecord::from(record)).unwrap();
        assert!(json.get("country").is_none());
        assert_eq!(json["userId"], "003");
        assert_eq!(json["line"], "456 Like St");
    }

    #[test]
    fn raw_address_accepts_text_and_fields() {
        let text: RawAddress = serde_json::from_value(serde_json::json!("456 Like St")).unwrap();
        assert!(matches!(
            e::address::RawAddress::from(text),
            e::address::RawAddress::Text(_)
        ));

        let fields: RawAddress = serde_json::from_value(serde_json::json!({
            "line": "456 Like St",
            "suburb": "Hawthorn East",
            "state": "VIC",
            "postcode": "3123",
        }))
        .unwrap();
        let e::address::RawAddress::Partial(address) = fields.into() else {
            panic!("expected structured fields");
        };
        assert!(address.is_complete());
        assert!(address.country.is_empty());
    }

    #[test]
    fn unusable_address_shapes_become_empty() {
        let other: RawAddress = serde_json::from_value(serde_json::json!(42)).unwrap();
        let converted: e::address::RawAddress = other.into();
        assert!(converted.is_empty());
    }
}
