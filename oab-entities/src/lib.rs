#![deny(missing_debug_implementations)]

//! # oab-entities
//!
//! Reusable, agnostic domain entities for the address book.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod id;
pub mod record;
