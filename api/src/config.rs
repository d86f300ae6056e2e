use std::env;
use std::net::{IpAddr, Ipv4Addr};

use anyhow::{anyhow, Context};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub bind_address: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid BIND_ADDRESS: {}", addr))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("Invalid PORT: {}", port))?,
            None => 8080,
        };

        Ok(Self {
            database_url,
            bind_address,
            port,
        })
    }
}
