use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub payment: PaymentConfig,
    pub map: MapConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PaymentConfig {
    /// Simulated handset round-trip before the push resolves.
    pub push_delay_ms: u64,
    /// Probability the simulated push succeeds.
    pub success_rate: f64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            push_delay_ms: 5_000,
            success_rate: 0.80,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MapConfig {
    /// User-supplied public access token for the map embed.
    pub access_token: Option<String>,
    pub style: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            style: "streets-v12".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ContactConfig {
    /// Agency WhatsApp line, canonical 254 form.
    pub whatsapp_msisdn: String,
    pub greeting: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            whatsapp_msisdn: "254700123456".to_string(),
            greeting: "Hello Makao, I am interested in one of your listings.".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payment: PaymentConfig::default(),
            map: MapConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Code defaults first, files and environment layered on top
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `MAKAO__PAYMENT__SUCCESS_RATE=1.0`
            .add_source(config::Environment::with_prefix("MAKAO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_simulator_reference() {
        let config = Config::default();
        assert_eq!(config.payment.push_delay_ms, 5_000);
        assert!((config.payment.success_rate - 0.80).abs() < f64::EPSILON);
        assert!(config.map.access_token.is_none());
    }
}
