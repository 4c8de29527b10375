use oab_core::gateways::geocode::GeocodingGateway;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod guards;


/// Which validation mode the create endpoint runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateMode {
    /// Trust the submitted fields; all of them are required.
    #[default]
    Direct,
    /// Verify the submission with the geocoding gateway first.
    Verified,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub create_mode: CreateMode,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: oab_db_mem::Connections,
    geocoder: Box<dyn GeocodingGateway + Send + Sync>,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    info!("Initialization finished");

    let r = match rocket_cfg {
        Some(rocket_cfg) => rocket::custom(rocket_cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .manage(guards::Connections::from(connections))
        .manage(guards::GeoCoding(geocoder))
        .manage(guards::Version(version))
        .manage(cfg)
        .register("/", rocket::catchers![api::not_found]);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![
        ("/address", api::address_routes()),
        ("/", api::util_routes()),
    ]
}

pub async fn run(
    connections: oab_db_mem::Connections,
    cfg: Cfg,
    geocoder: Box<dyn GeocodingGateway + Send + Sync>,
    version: &'static str,
) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        cfg,
        version,
    };
    let instance = rocket_instance(options, connections, geocoder);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
