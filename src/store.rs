//! Store client and per-request sessions.
//!
//! `Store` owns the connection pool; the API holds it inside a shared
//! `Arc<AppState>`. Handlers never touch the pool directly: each request
//! opens a [`Session`], runs its query against `session.conn()`, and calls
//! [`Session::finish`]. A session that is dropped early (an error bubbled up
//! with `?`) rolls back and hands its connection back to the pool.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction,
    TransactionTrait,
};

use crate::error::Result;
use crate::schema;

#[derive(Clone, Debug)]
pub struct Store {
    conn: DatabaseConnection,
}

impl Store {
    /// Connects a pool of at most `max_connections` to `url`.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .max_connections(max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        Ok(Self { conn })
    }

    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The underlying pool, for seeding and administrative statements.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Round-trips a trivial statement to confirm the store is reachable.
    pub async fn ping(&self) -> Result<()> {
        self.conn.ping().await?;
        Ok(())
    }

    /// Creates any missing tables.
    pub async fn ensure_schema(&self) -> Result<()> {
        schema::create_all(&self.conn).await?;
        tracing::info!(backend = ?self.conn.get_database_backend(), "schema ready");
        Ok(())
    }

    /// Acquires a session for a single request.
    pub async fn session(&self) -> Result<Session> {
        let txn = self.conn.begin().await?;
        Ok(Session { txn })
    }
}

/// A request-scoped connection.
pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    pub fn conn(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commits and releases the connection.
    pub async fn finish(self) -> Result<()> {
        self.txn.commit().await?;
        Ok(())
    }
}
