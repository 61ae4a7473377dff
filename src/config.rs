use std::env;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

/// Runtime settings of one service.
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Config {
    /// Defaults for `name`, overridden by `HOST`, `PORT`,
    /// `SHUTDOWN_TIMEOUT_SECS` and `ALLOWED_ORIGINS`.
    pub fn from_env(name: &str, default_port: u16) -> Self {
        Self::from_lookup(name, default_port, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(name: &str, default_port: u16, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = parse_or("PORT", lookup("PORT"), default_port);
        let timeout_secs = parse_or(
            "SHUTDOWN_TIMEOUT_SECS",
            lookup("SHUTDOWN_TIMEOUT_SECS"),
            DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        );
        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: name.to_string(),
            host,
            port,
            shutdown_timeout: Duration::from_secs(timeout_secs),
            allowed_origins,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match raw {
        Some(value) => match value.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                log::warn!("⚠️  Invalid {}={:?}, using default {}", key, value, default);
                default
            }
        },
        None => default,
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup("user-service", 3001, lookup(&[]));
        assert_eq!(cfg.name, "user-service");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3001");
        assert_eq!(cfg.shutdown_timeout, Duration::from_secs(5));
        assert!(cfg.allowed_origins.is_empty());
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(
            "test-service",
            3000,
            lookup(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "8080"),
                ("SHUTDOWN_TIMEOUT_SECS", "10"),
                ("ALLOWED_ORIGINS", "http://localhost:3000, http://127.0.0.1:3000,"),
            ]),
        );
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.shutdown_timeout, Duration::from_secs(10));
        assert_eq!(
            cfg.allowed_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let cfg = Config::from_lookup(
            "test-service",
            3000,
            lookup(&[("PORT", "http"), ("SHUTDOWN_TIMEOUT_SECS", "-1")]),
        );
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.shutdown_timeout, Duration::from_secs(5));
    }
}
