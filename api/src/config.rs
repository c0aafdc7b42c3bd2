use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (all interfaces unless HOST is set)
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the page markup, stylesheet and controller script
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("STATIC_DIR").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>, static_dir: Option<String>) -> Self {
        let defaults = Self::default();

        let host = match host {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid HOST {:?}, using {}", raw, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match port {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self {
            host,
            port,
            static_dir: static_dir
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
