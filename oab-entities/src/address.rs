#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub line     : String,
    pub suburb   : String,
    pub state    : String,
    pub postcode : String,
    pub country  : String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
            && self.suburb.is_empty()
            && self.state.is_empty()
            && self.postcode.is_empty()
            && self.country.is_empty()
    }

    /// All fields required for an unverified submission are present.
    /// The country is optional and not considered here.
    pub fn is_complete(&self) -> bool {
        !self.line.is_empty()
            && !self.suburb.is_empty()
            && !self.state.is_empty()
            && !self.postcode.is_empty()
    }

    /// A geocoding result without an address line could not be resolved.
    pub fn is_unresolved(&self) -> bool {
        self.line.is_empty()
    }
}

/// An address as submitted by a caller, before any resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAddress {
    /// Free text, to be interpreted by a geocoding provider.
    Text(String),
    /// A (possibly partial) set of structured fields.
    Partial(Address),
}

impl RawAddress {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Partial(address) => address.is_empty(),
        }
    }
}
