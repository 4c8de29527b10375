use std::{fmt::Display, result};

use rocket::{
    catch,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Route,
};
use serde::de::DeserializeOwned;

use crate::web::guards::*;
use oab_boundary as json;

mod addresses;
mod error;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;

pub fn address_routes() -> Vec<Route> {
    routes![addresses::post_create, addresses::post_find]
}

pub fn util_routes() -> Vec<Route> {
    routes![util::get_version]
}

#[catch(404)]
pub fn not_found() -> Json<json::ResponseMessage> {
    Json("Not Found".into())
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    Json(json::ResponseMessage { message })
        .respond_to(req)
        .map(|mut res| {
            res.set_status(status);
            res
        })
}

/// The transport may hand the body over either as a JSON document or as
/// a JSON-encoded string containing one; unwrap the extra encoding
/// level before deserializing.
fn from_body<T: DeserializeOwned>(body: &str) -> anyhow::Result<T> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    let value = match value {
        serde_json::Value::String(text) => serde_json::from_str(&text)?,
        value => value,
    };
    Ok(serde_json::from_value(value)?)
}
