use anyhow::Context;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when neither `SCOREBOARD_ADDR` nor `PORT` is set
pub const DEFAULT_PORT: u16 = 8080;

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// `SCOREBOARD_ADDR` takes precedence over `PORT`. Malformed values are
    /// errors rather than falling back to the default.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("SCOREBOARD_ADDR") {
            config.bind_addr = addr
                .parse()
                .with_context(|| format!("invalid SCOREBOARD_ADDR: {addr:?}"))?;
        } else if let Some(port) = lookup("PORT") {
            let port: u16 = port
                .parse()
                .with_context(|| format!("invalid PORT: {port:?}"))?;
            config.bind_addr.set_port(port);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_port_override() {
        let config = ServiceConfig::from_lookup(lookup(&[("PORT", "9001")])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9001".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_addr_takes_precedence() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("SCOREBOARD_ADDR", "127.0.0.1:7000"),
            ("PORT", "9001"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_malformed_values_are_errors() {
        assert!(ServiceConfig::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup(&[("SCOREBOARD_ADDR", "localhost")])).is_err());
    }
}
