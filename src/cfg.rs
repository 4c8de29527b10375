use std::env;

use oab_webserver::CreateMode;

/// Which provider the verified create path resolves addresses with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeocodingProvider {
    #[default]
    Google,
    Here,
}

#[derive(Debug, Clone, Default)]
pub struct Cfg {
    pub create_mode: CreateMode,
    pub geocoding_provider: GeocodingProvider,
    pub google_api_key: Option<String>,
    pub here_api_key: Option<String>,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(mode) = env::var("CREATE_MODE").map(|s| s.to_lowercase()) {
            cfg.create_mode = match mode.as_str() {
                "verified" => CreateMode::Verified,
                "direct" => CreateMode::Direct,
                other => {
                    log::warn!("Unknown create mode {other:?}: use direct mode");
                    CreateMode::Direct
                }
            };
        }
        if let Ok(provider) = env::var("GEOCODING_PROVIDER").map(|s| s.to_lowercase()) {
            cfg.geocoding_provider = match provider.as_str() {
                "here" => GeocodingProvider::Here,
                "google" => GeocodingProvider::Google,
                other => {
                    log::warn!("Unknown geocoding provider {other:?}: use Google Maps");
                    GeocodingProvider::Google
                }
            };
        }
        if let Ok(key) = env::var("GOOGLE_MAPS_API_KEY") {
            cfg.google_api_key = Some(key);
        }
        if let Ok(key) = env::var("HERE_MAPS_API_KEY") {
            cfg.here_api_key = Some(key);
        }
        cfg
    }
}
