//! Build-time application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client ships as a static WASM bundle, so configuration is baked in at
//! compile time from `GOKERAL_*` environment variables. Parsing goes through
//! [`AppConfig::from_lookup`] so tests can feed arbitrary values.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_MAPS_API_KEY: &str = "YOUR_API_KEY_HERE";
pub const DEFAULT_MAP_CENTER: (f64, f64) = (9.9312, 76.2673);
pub const DEFAULT_MAP_ZOOM: u8 = 15;
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the authentication service, without a trailing slash.
    pub api_base_url: String,
    pub maps_api_key: String,
    /// Initial map center as `(lat, lng)`.
    pub map_center: (f64, f64),
    pub map_zoom: u8,
    /// Delay before redirecting to login after a successful registration.
    pub redirect_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            maps_api_key: DEFAULT_MAPS_API_KEY.to_owned(),
            map_center: DEFAULT_MAP_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Recognized:
    /// - `GOKERAL_API_BASE_URL`: default `/api`
    /// - `GOKERAL_MAPS_API_KEY`: Google Maps browser key
    /// - `GOKERAL_MAP_CENTER`: `"lat,lng"`, default Kochi
    /// - `GOKERAL_MAP_ZOOM`: default 15
    /// - `GOKERAL_REDIRECT_DELAY_MS`: default 2000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a present value does not parse.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "GOKERAL_API_BASE_URL" => option_env!("GOKERAL_API_BASE_URL"),
                "GOKERAL_MAPS_API_KEY" => option_env!("GOKERAL_MAPS_API_KEY"),
                "GOKERAL_MAP_CENTER" => option_env!("GOKERAL_MAP_CENTER"),
                "GOKERAL_MAP_ZOOM" => option_env!("GOKERAL_MAP_ZOOM"),
                "GOKERAL_REDIRECT_DELAY_MS" => option_env!("GOKERAL_REDIRECT_DELAY_MS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Like [`AppConfig::from_build_env`], but falls back to defaults and logs
    /// the problem instead of failing.
    pub fn load() -> Self {
        match Self::from_build_env() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config error, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a present value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("GOKERAL_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| DEFAULT_API_BASE_URL.to_owned(), |v| v.trim().trim_end_matches('/').to_owned());
        let maps_api_key = lookup("GOKERAL_MAPS_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MAPS_API_KEY.to_owned());
        let map_center = match lookup("GOKERAL_MAP_CENTER") {
            Some(raw) => parse_center(&raw)?,
            None => DEFAULT_MAP_CENTER,
        };
        let map_zoom = match lookup("GOKERAL_MAP_ZOOM") {
            Some(raw) => raw.trim().parse::<u8>().map_err(|e| ConfigError::Invalid {
                var: "GOKERAL_MAP_ZOOM",
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAP_ZOOM,
        };
        let redirect_delay_ms = match lookup("GOKERAL_REDIRECT_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "GOKERAL_REDIRECT_DELAY_MS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_REDIRECT_DELAY_MS,
        };

        Ok(Self { api_base_url, maps_api_key, map_center, map_zoom, redirect_delay_ms })
    }

    /// Join `path` onto the API base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn parse_center(raw: &str) -> Result<(f64, f64), ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid { var: "GOKERAL_MAP_CENTER", reason: reason.to_owned() };
    let (lat, lng) = raw.split_once(',').ok_or_else(|| invalid("expected \"lat,lng\""))?;
    let lat = lat.trim().parse::<f64>().map_err(|_| invalid("latitude is not a number"))?;
    let lng = lng.trim().parse::<f64>().map_err(|_| invalid("longitude is not a number"))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(invalid("coordinates out of range"));
    }
    Ok((lat, lng))
}
