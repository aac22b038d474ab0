//! Process configuration read from environment variables.
//!
//! Every option is resolved once at start-up. Missing required options and
//! unparseable values are reported as [`ConfigError`] so the server can
//! refuse to start instead of failing on first use.

use crate::database::PoolSettings;
use crate::notification::{
    adapters::smtp::{SmtpSecurity, SmtpSettings},
    domain::NoticeLanguage,
};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Listen address used when `INSPECTION_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));
/// Sender display name used when `MAIL_FROM_NAME` is unset.
pub const DEFAULT_FROM_NAME: &str = "Property Management";

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_IDLE: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_SMTP_PORT: u16 = 465;
const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("environment variable {name} has invalid value '{value}': {reason}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
}

/// Fully resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listen address.
    pub bind_addr: SocketAddr,
    /// Connection pool settings for the task store.
    pub database: PoolSettings,
    /// SMTP relay and sender settings.
    pub smtp: SmtpSettings,
    /// Language of tenant-facing notices.
    pub notice_language: NoticeLanguage,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Lookup(&lookup);

        let bind_addr = env
            .parsed("INSPECTION_BIND_ADDR")?
            .unwrap_or(DEFAULT_BIND_ADDR);

        let database = PoolSettings {
            database_url: env.required("DATABASE_URL")?,
            max_connections: env
                .parsed("DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            min_idle: env.parsed("DATABASE_MIN_IDLE")?.unwrap_or(DEFAULT_MIN_IDLE),
            connect_timeout: Duration::from_millis(
                env.parsed("DATABASE_CONNECT_TIMEOUT_MS")?
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS),
            ),
        };

        let username = env.required("SMTP_USERNAME")?;
        let smtp = SmtpSettings {
            host: env.required("SMTP_HOST")?,
            port: env.parsed("SMTP_PORT")?.unwrap_or(DEFAULT_SMTP_PORT),
            security: env
                .converted("SMTP_SECURITY", |raw| SmtpSecurity::try_from(raw))?
                .unwrap_or_default(),
            password: env.required("SMTP_PASSWORD")?,
            from_address: env
                .optional("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|| username.clone()),
            from_name: env
                .optional("MAIL_FROM_NAME")
                .unwrap_or_else(|| DEFAULT_FROM_NAME.to_owned()),
            username,
            timeout: SMTP_TIMEOUT,
        };

        let notice_language = env
            .converted("NOTICE_LANGUAGE", |raw| NoticeLanguage::try_from(raw))?
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            database,
            smtp,
            notice_language,
        })
    }
}

struct Lookup<'a, F: Fn(&str) -> Option<String>>(&'a F);

impl<F: Fn(&str) -> Option<String>> Lookup<'_, F> {
    fn optional(&self, name: &'static str) -> Option<String> {
        (self.0)(name)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.optional(name).ok_or(ConfigError::Missing(name))
    }

    fn converted<T, E: std::fmt::Display>(
        &self,
        name: &'static str,
        convert: impl Fn(&str) -> Result<T, E>,
    ) -> Result<Option<T>, ConfigError> {
        self.optional(name)
            .map(|value| {
                convert(&value).map_err(|err| ConfigError::Invalid {
                    name,
                    reason: err.to_string(),
                    value,
                })
            })
            .transpose()
    }

    fn parsed<T>(&self, name: &'static str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.converted(name, T::from_str)
    }
}
