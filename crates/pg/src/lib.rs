//! PostgreSQL integration for the marketplace backend.
//!
//! Low-level database connectivity plus compile-time DDL generation for the
//! persistent entities. SQL strings are assembled at compile time from the
//! table-name constants via [`const_format::concatcp!`].
//!
//! ## Connectivity
//!
//! - [`db()`] — Establishes a database connection from `DB_URL`
//!
//! ## Schema
//!
//! - [`Schema`] — Table metadata and DDL generation
//! - [`ensure`] — Idempotent table/index creation at startup
mod schema;

pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Connects to PostgreSQL using the `DB_URL` environment variable.
/// Returns an `Arc<Client>` suitable for sharing across async tasks.
///
/// # Panics
///
/// Panics if `DB_URL` is not set or if connection fails.
pub async fn db() -> Arc<Client> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    let (client, connection) = tokio_postgres::connect(url, tls)
        .await
        .expect("database connection failed");
    tokio::spawn(connection);
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await
        .expect("set client_min_messages");
    Arc::new(client)
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for registered user accounts.
#[rustfmt::skip]
pub const USERS:     &str = "users";
/// Table for cash-on-delivery pickup locations.
#[rustfmt::skip]
pub const LOCATIONS: &str = "cod_locations";
