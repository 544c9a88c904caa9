use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 5000;

pub struct AppConfig {
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(v) => v
                .parse::<IpAddr>()
                .with_context(|| format!("HOST is not an IP address: {v}"))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {v}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            server: ServerConfig { host, port },
        })
    }
}

pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_all_interfaces_on_5000() -> Result<()> {
        let config = AppConfig::from_lookup(lookup_from(&[]))?;
        assert_eq!(config.server.addr(), "0.0.0.0:5000".parse()?);
        Ok(())
    }

    #[test]
    fn reads_host_and_port() -> Result<()> {
        let config =
            AppConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "8080")]))?;
        assert_eq!(config.server.addr(), "127.0.0.1:8080".parse()?);
        Ok(())
    }

    #[test]
    fn rejects_bad_port() {
        let res = AppConfig::from_lookup(lookup_from(&[("PORT", "http")]));
        assert!(res.is_err());
    }

    #[test]
    fn rejects_bad_host() {
        let res = AppConfig::from_lookup(lookup_from(&[("HOST", "localhost:80")]));
        assert!(res.is_err());
    }
}
