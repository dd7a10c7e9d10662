use std::string::ToString;

use config::{Config, ConfigError};
use once_cell::sync::Lazy;
use rocket::form::validate::Contains;
use rocket::serde::Deserialize;

/// config properties for the rabbit queue
#[derive(Deserialize, Clone)]
pub struct RabbitMqConfig {
    pub address: Option<String>,
    pub enabled: bool,
}

#[derive(Deserialize, Clone)]
pub struct DbConfig {
    pub location: String,
}

/// config properties for the object store holding uploaded file blobs
#[derive(Deserialize, Clone)]
pub struct StorageConfig {
    /// directory blobs are written under
    pub location: String,
    /// prefix baked into the download urls handed back to clients
    #[serde(rename = "baseurl")]
    pub base_url: String,
}

/// fixed-window rate limit applied to unbounded write sequences (repair,
/// notification fan-out)
#[derive(Deserialize, Clone)]
pub struct RateLimitConfig {
    #[serde(rename = "requestsperwindow")]
    pub requests_per_window: u32,
    #[serde(rename = "windowmillis")]
    pub window_millis: u32,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone)]
pub struct ResourceServerConfig {
    #[serde(rename = "rabbitmq")]
    pub rabbit_mq: RabbitMqConfig,
    pub database: DbConfig,
    pub storage: StorageConfig,
    #[serde(rename = "ratelimit")]
    pub rate_limit: RateLimitConfig,
}

/// Parses the config file located at ./ResourceServer.toml, if it exists.
/// If this fails to parse the file, the application will panic
pub fn parse_config() -> ResourceServerConfig {
    let builder = Config::builder()
        .add_source(config::File::with_name("./ResourceServer.toml"))
        .build();
    // some errors are fine, such as not found
    if let Err(ConfigError::Foreign(e)) = builder {
        let message = e.to_string();
        if message.contains("not found") {
            log::warn!("No config file found. Continuing startup...");
            return CONFIG_DEFAULT.clone();
        }
        panic!("Failed to parse config file. Exception is {e}");
        // basically everything else is unrecoverable, though
    } else if let Err(e) = builder {
        log::error!("Failed to parse config file. Exception is {e}");
        panic!("Failed to parse config file. Exception is {e}");
    }
    let settings = builder.unwrap();
    settings.try_deserialize().unwrap_or(CONFIG_DEFAULT.clone())
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static RESOURCE_SERVER_CONFIG: Lazy<ResourceServerConfig> = Lazy::new(parse_config);
static CONFIG_DEFAULT: Lazy<ResourceServerConfig> = Lazy::new(|| ResourceServerConfig {
    rabbit_mq: RabbitMqConfig {
        address: Some("amqp://127.0.0.1:5672".to_string()),
        enabled: true,
    },
    database: DbConfig {
        location: "./db.sqlite".to_string(),
    },
    storage: StorageConfig {
        location: "./objects".to_string(),
        base_url: "http://localhost:8000/storage".to_string(),
    },
    rate_limit: RateLimitConfig {
        requests_per_window: 10,
        window_millis: 1_000,
    },
});
