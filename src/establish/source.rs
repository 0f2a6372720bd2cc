//! Capability contract for connectable resources.

use std::error::Error;
use std::future::Future;

/// A resource that can be connected to: a database, a queue, a cache.
///
/// Implementors supply the driver-specific parts; the establisher owns the
/// retry loop and decides where the resulting handle lives.
///
/// Connect errors are logged through `tracing` at ERROR (message) and DEBUG
/// (source chain). Hosts without their own subscriber should call
/// [`logging::init`](crate::observability::logging::init), which installs a
/// stdout subscriber; otherwise those records are dropped.
///
/// ```ignore
/// struct Postgres { url: String }
///
/// impl Source for Postgres {
///     type Connection = Client;
///     type Error = tokio_postgres::Error;
///
///     async fn connect(&self) -> Result<Client, Self::Error> {
///         // open the connection
///     }
///
///     fn is_open(&self, client: &Client) -> bool {
///         !client.is_closed()
///     }
/// }
/// ```
pub trait Source: Send + Sync + 'static {
    /// Handle produced by a successful connect. Opaque to the establisher.
    type Connection: Send + Sync + 'static;

    /// Raised when the underlying resource cannot be reached.
    type Error: Error + Send + Sync + 'static;

    /// Open a new connection.
    fn connect(&self) -> impl Future<Output = Result<Self::Connection, Self::Error>> + Send;

    /// Liveness check for a connection produced by this source.
    fn is_open(&self, connection: &Self::Connection) -> bool;

    fn is_closed(&self, connection: &Self::Connection) -> bool {
        !self.is_open(connection)
    }

    /// Name used in logs and metric labels.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
