use rocket::{get, State};

use super::*;

#[get("/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}
