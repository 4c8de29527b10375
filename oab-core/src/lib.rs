//! # oab-core
//!
//! The business core of the address book: the repository and gateway
//! contracts together with the usecases that validate requests and
//! assemble storage queries.

pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use oab_entities::{address::*, id::*, record::*};
}
