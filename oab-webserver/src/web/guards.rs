use std::ops::Deref;

use oab_core::gateways::geocode::GeocodingGateway;
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

// Wrapper to be able to implement `FromRequest`
#[derive(Clone)]
pub struct Connections(oab_db_mem::Connections);

impl From<oab_db_mem::Connections> for Connections {
    fn from(connections: oab_db_mem::Connections) -> Self {
        Self(connections)
    }
}

impl Deref for Connections {
    type Target = oab_db_mem::Connections;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(connections.inner().clone())
    }
}

pub struct GeoCoding(pub Box<dyn GeocodingGateway + Send + Sync>);

pub struct Version(pub &'static str);
