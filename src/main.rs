use clap::Parser;

mod cfg;
mod gateways;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(version, about = "Address book web service")]
struct Args {
    /// Verify submitted addresses with the geocoding provider
    /// before storing them (overrides CREATE_MODE).
    #[arg(long)]
    verified: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();
    let args = Args::parse();

    let mut cfg = cfg::Cfg::from_env_or_default();
    if args.verified {
        cfg.create_mode = oab_webserver::CreateMode::Verified;
    }
    log::info!("Create mode: {:?}", cfg.create_mode);

    let geocoder = gateways::geocoding_gateway(&cfg);
    let connections = oab_db_mem::Connections::init();

    let web_cfg = oab_webserver::Cfg {
        create_mode: cfg.create_mode,
    };
    oab_webserver::run(connections, web_cfg, geocoder, VERSION).await;
}
