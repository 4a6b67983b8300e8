use std::{env, time::Duration};

use crate::{error::ConfigError, i18n::Language};

pub const DEFAULT_DEMO_PASSWORD: &str = "password123";

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub default_language: Language,
    pub chat_reply_delay: Duration,
    pub chat_idle_timeout: Duration,
    pub demo_password: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_dir: "./static".to_string(),
            default_language: Language::En,
            chat_reply_delay: Duration::from_millis(1500),
            chat_idle_timeout: Duration::from_secs(30 * 60),
            demo_password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value,
            })?,
            None => defaults.port,
        };

        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(value) => Language::from_code(&value).ok_or(ConfigError::InvalidValue {
                key: "DEFAULT_LANGUAGE",
                value,
            })?,
            None => defaults.default_language,
        };

        let chat_reply_delay = match lookup("CHAT_REPLY_DELAY_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidValue {
                    key: "CHAT_REPLY_DELAY_MS",
                    value,
                })?,
            None => defaults.chat_reply_delay,
        };

        let chat_idle_timeout = match lookup("CHAT_IDLE_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CHAT_IDLE_TIMEOUT_SECS",
                        value,
                    })
                }
            },
            None => defaults.chat_idle_timeout,
        };

        let demo_password = lookup("DEMO_PASSWORD")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.demo_password);
        if demo_password == DEFAULT_DEMO_PASSWORD {
            log::warn!("DEMO_PASSWORD not set. Demo accounts use the default password '{DEFAULT_DEMO_PASSWORD}'.");
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            default_language,
            chat_reply_delay,
            chat_idle_timeout,
            demo_password,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.chat_reply_delay, Duration::from_millis(1500));
        assert_eq!(config.chat_idle_timeout, Duration::from_secs(1800));
        assert_eq!(config.demo_password, DEFAULT_DEMO_PASSWORD);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("DEFAULT_LANGUAGE", "ur"),
            ("CHAT_REPLY_DELAY_MS", "250"),
            ("CHAT_IDLE_TIMEOUT_SECS", "90"),
            ("DEMO_PASSWORD", "s3cret"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.default_language, Language::Ur);
        assert_eq!(config.chat_reply_delay, Duration::from_millis(250));
        assert_eq!(config.chat_idle_timeout, Duration::from_secs(90));
        assert_eq!(config.demo_password, "s3cret");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("DEFAULT_LANGUAGE", "fr")])).is_err());
        assert!(Config::from_lookup(lookup(&[("CHAT_REPLY_DELAY_MS", "-1")])).is_err());
        assert!(Config::from_lookup(lookup(&[("CHAT_IDLE_TIMEOUT_SECS", "0")])).is_err());
    }
}
