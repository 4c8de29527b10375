#[macro_use]
extern crate log;

use oab_core::gateways::geocode::GeocodingGateway;
use oab_db_mem::Connections;

mod web;

pub use web::{Cfg, CreateMode};

pub async fn run(
    connections: Connections,
    cfg: Cfg,
    geocoder: Box<dyn GeocodingGateway + Send + Sync>,
    version: &'static str,
) {
    web::run(connections, cfg, geocoder, version).await;
}
