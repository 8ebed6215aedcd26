use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::services::activities_service::{SignupPolicy, DEFAULT_EMAIL_DOMAIN};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub signup_policy: SignupPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            signup_policy: SignupPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Reads HOST, PORT, STATIC_DIR, ENFORCE_DOMAIN_SUFFIX and
    /// ALLOWED_EMAIL_DOMAIN from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: v.clone(),
            })?,
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let enforce_domain_suffix = match lookup("ENFORCE_DOMAIN_SUFFIX") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::InvalidValue {
                key: "ENFORCE_DOMAIN_SUFFIX",
                value: v.clone(),
            })?,
            None => false,
        };

        let domain_suffix = match lookup("ALLOWED_EMAIL_DOMAIN") {
            Some(v) => {
                let v = v.trim();
                if v.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: "ALLOWED_EMAIL_DOMAIN",
                        value: v.to_string(),
                    });
                }
                if v.starts_with('@') {
                    v.to_string()
                } else {
                    format!("@{}", v)
                }
            }
            None => DEFAULT_EMAIL_DOMAIN.to_string(),
        };

        Ok(Self {
            host,
            port,
            static_dir,
            signup_policy: SignupPolicy {
                enforce_domain_suffix,
                domain_suffix,
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_dir, PathBuf::from("static"));
        assert_eq!(config.signup_policy, SignupPolicy::default());
    }

    #[test]
    fn domain_restriction_from_env() {
        let config = config_from(&[
            ("ENFORCE_DOMAIN_SUFFIX", "true"),
            ("ALLOWED_EMAIL_DOMAIN", "school.org"),
        ])
        .unwrap();
        assert!(config.signup_policy.enforce_domain_suffix);
        assert_eq!(config.signup_policy.domain_suffix, "@school.org");
    }

    #[test]
    fn invalid_values_name_the_variable() {
        assert_eq!(
            config_from(&[("PORT", "eighty")]).unwrap_err(),
            ConfigError::InvalidValue {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
        assert!(matches!(
            config_from(&[("ENFORCE_DOMAIN_SUFFIX", "maybe")]),
            Err(ConfigError::InvalidValue {
                key: "ENFORCE_DOMAIN_SUFFIX",
                ..
            })
        ));
    }
}
