use std::path::Path;

use figment::providers::{Env, Format, Json, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{TicketError, TicketResult};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    pub endpoints: EndpointsConfig,
    pub infra: InfraConfig,
}

impl AppConfig {
    pub fn validate(&self) -> TicketResult<()> {
        self.endpoints.validate()?;
        self.infra.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointsConfig {
    /// Base URL of the order-book/trade backend. Joined with `/orderbook/{asset}`
    /// and `/trade`; a trailing slash is tolerated.
    pub trade_api_base_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            // The packaged backend listens on 8080.
            trade_api_base_url: "http://localhost:8080".to_string(),
        }
    }
}

impl EndpointsConfig {
    fn validate(&self) -> TicketResult<()> {
        if self.trade_api_base_url.trim().is_empty() {
            return Err(TicketError::Config(
                "endpoints.trade_api_base_url must not be empty; set OTK_ENDPOINTS__TRADE_API_BASE_URL"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InfraConfig {
    pub log_level: String,
}

impl Default for InfraConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl InfraConfig {
    fn validate(&self) -> TicketResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(TicketError::Config(
                "infra.log_level must not be empty; set OTK_INFRA__LOG_LEVEL".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn load_config() -> TicketResult<AppConfig> {
    let figment = build_figment_from_env()?;
    load_config_from(figment)
}

fn build_figment_from_env() -> TicketResult<Figment> {
    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

    if let Ok(path) = std::env::var("OTK_CONFIG_PATH") {
        figment = merge_config_file(figment, &path)?;
    }

    figment = figment.merge(Env::prefixed("OTK_").split("__"));
    Ok(figment)
}

fn merge_config_file(figment: Figment, path: &str) -> TicketResult<Figment> {
    let p = Path::new(path);
    match p.extension().and_then(|s| s.to_str()) {
        Some("toml") => Ok(figment.merge(Toml::file(path))),
        Some("json") => Ok(figment.merge(Json::file(path))),
        _ => Err(TicketError::Config(format!(
            "unsupported config file extension for OTK_CONFIG_PATH: {path} (expected .toml or .json)"
        ))),
    }
}

fn load_config_from(figment: Figment) -> TicketResult<AppConfig> {
    let cfg: AppConfig = figment
        .extract()
        .map_err(|e| TicketError::Config(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}
