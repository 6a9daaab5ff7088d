//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every section is optional; missing values fall back to the built-in
//! defaults so the calculator runs with no config file at all.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use tracing::warn;

use crate::types::{OrderVolume, PurchaseOrderVolume};

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app: GeneralConfig,
    pub dashboard: DashboardConfig,
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeneralConfig {
    pub name: String,
    /// Width of the text chart printed by the CLI, in cells.
    pub chart_width: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            name: "Section 321 Savings Calculator".to_string(),
            chart_width: 40,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8321,
        }
    }
}

impl DashboardConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

/// Form values used when a field is left blank.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DefaultsConfig {
    pub orders: OrderVolume,
    pub purchase_orders: PurchaseOrderVolume,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Load an explicitly requested file (must exist), or the default file
    /// if present, or the built-in defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => {
                warn!(
                    path = DEFAULT_CONFIG_FILE,
                    "No config file found, using built-in defaults"
                );
                Ok(Self::default())
            }
        }
    }
}
