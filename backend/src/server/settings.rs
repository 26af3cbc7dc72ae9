//! Service settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `TICKET_*` environment variables and an
//! optional configuration file.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{DEFAULT_POOL_MAX_SIZE, PoolConfig};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Errors raised when settings cannot be turned into runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid host {host:?}: expected an IP address")]
    InvalidHost { host: String },
}

/// Configuration values for the ticket service binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TICKET")]
pub struct TicketServiceSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection string. Tickets are kept in memory when unset.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl TicketServiceSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 5000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the configured pool size, falling back to the pool default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Socket address assembled from `host` and `port`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host().trim();
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }

    /// Pool configuration when a non-blank database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| PoolConfig::new(url).with_max_size(self.pool_max_size()))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> TicketServiceSettings {
        TicketServiceSettings::load_from_iter([OsString::from("ticket-service")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("TICKET_HOST", None::<String>),
            ("TICKET_PORT", None::<String>),
            ("TICKET_DATABASE_URL", None::<String>),
            ("TICKET_POOL_MAX_SIZE", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(settings.pool_config().is_none());
        assert_eq!(
            settings.bind_addr(),
            Ok("0.0.0.0:5000".parse().expect("socket address"))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TICKET_HOST", Some("127.0.0.1".to_owned())),
            ("TICKET_PORT", Some("8080".to_owned())),
            (
                "TICKET_DATABASE_URL",
                Some("postgres://tickets@localhost/tickets".to_owned()),
            ),
            ("TICKET_POOL_MAX_SIZE", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            Ok("127.0.0.1:8080".parse().expect("socket address"))
        );
        let pool = settings.pool_config().expect("pool config");
        assert_eq!(pool.database_url(), "postgres://tickets@localhost/tickets");
        assert_eq!(pool.max_size(), 4);
    }

    #[rstest]
    #[case(Some("   "))]
    #[case(Some(""))]
    #[case(None)]
    fn blank_database_urls_select_memory_storage(#[case] url: Option<&str>) {
        let settings = TicketServiceSettings {
            host: None,
            port: None,
            database_url: url.map(str::to_owned),
            pool_max_size: None,
        };
        assert!(settings.pool_config().is_none());
    }

    #[rstest]
    fn hostnames_are_rejected() {
        let settings = TicketServiceSettings {
            host: Some("localhost".to_owned()),
            port: None,
            database_url: None,
            pool_max_size: None,
        };
        assert_eq!(
            settings.bind_addr(),
            Err(SettingsError::InvalidHost {
                host: "localhost".to_owned()
            })
        );
    }
}
