mod create_address;
mod error;
mod find_addresses;


pub use self::{create_address::*, error::Error, find_addresses::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*, repositories::*};
}
