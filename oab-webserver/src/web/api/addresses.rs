use rocket::{post, State};

use super::*;
use crate::web::{Cfg, CreateMode};
use oab_core::usecases::{self, AddressSearch, NewAddress};

#[post("/create", data = "<body>")]
pub fn post_create(
    db: Connections,
    geocoder: &State<GeoCoding>,
    cfg: &State<Cfg>,
    body: Option<String>,
) -> result::Result<(Status, Json<json::ResponseMessage>), ApiError> {
    let Some(body) = body.filter(|body| !body.is_empty()) else {
        return Err(usecases::Error::MissingBody.into());
    };
    let request: json::CreateAddressRequest = from_body(&body)?;
    let new_address = NewAddress {
        user_id: request.user_id,
        address: request.address.map(Into::into),
    };
    let (status, message) = match cfg.create_mode {
        CreateMode::Direct => {
            usecases::create_address(&*db, new_address)?;
            (Status::Created, "Address Created!")
        }
        CreateMode::Verified => {
            usecases::create_verified_address(&*db, geocoder.0.as_ref(), new_address)?;
            (Status::Ok, "Address created successfully")
        }
    };
    Ok((status, Json(message.into())))
}

#[post("/find", data = "<body>")]
pub fn post_find(db: Connections, body: Option<String>) -> Result<Vec<json::AddressRecord>> {
    let Some(body) = body.filter(|body| !body.is_empty()) else {
        return Err(usecases::Error::MissingBody.into());
    };
    let request: json::FindAddressRequest = from_body(&body)?;
    let search = AddressSearch {
        user_id: request.user_id,
        suburb: locality_field(request.address.as_ref(), "suburb"),
        postcode: locality_field(request.address.as_ref(), "postcode"),
    };
    let records = usecases::find_addresses(&*db, search)?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

/// Permissive lookup of a locality field: any `address` shape that does
/// not carry a string under the given key degrades to "no filter",
/// never into an error.
fn locality_field(address: Option<&serde_json::Value>, key: &str) -> Option<String> {
    address
        .and_then(|address| address.get(key))
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
