use crate::cfg::{Cfg, GeocodingProvider};
use oab_core::gateways::geocode::GeocodingGateway;
use oab_gateways::{google::GoogleMaps, here::HereMaps};

pub fn geocoding_gateway(cfg: &Cfg) -> Box<dyn GeocodingGateway + Send + Sync> {
    match cfg.geocoding_provider {
        GeocodingProvider::Google => {
            log::info!("Use Google Maps geocoding gateway");
            if cfg.google_api_key.is_none() {
                log::warn!("No Google Maps API key found");
            }
            Box::new(GoogleMaps::new(cfg.google_api_key.clone()))
        }
        GeocodingProvider::Here => {
            log::info!("Use HERE Maps geocoding gateway");
            if cfg.here_api_key.is_none() {
                log::warn!("No HERE Maps API key found");
            }
            Box::new(HereMaps::new(cfg.here_api_key.clone()))
        }
    }
}
