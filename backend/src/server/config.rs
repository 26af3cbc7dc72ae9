//! HTTP server configuration object.

use std::net::{SocketAddr, TcpListener};

use crate::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
///
/// Without a pool the server stores tickets in memory.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) listener: Option<TcpListener>,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with no database.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            listener: None,
        }
    }

    /// Attach a database connection pool so tickets are stored in
    /// PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Serve on an already bound listener instead of binding `bind_addr`.
    ///
    /// Lets callers bind port 0 and learn the chosen port before the server
    /// starts.
    #[must_use]
    pub fn with_listener(mut self, listener: TcpListener) -> Self {
        self.bind_addr = listener.local_addr().unwrap_or(self.bind_addr);
        self.listener = Some(listener);
        self
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Whether a database pool has been attached.
    #[must_use]
    pub fn has_db_pool(&self) -> bool {
        self.db_pool.is_some()
    }
}
