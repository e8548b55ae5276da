use super::*;

/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL generation for table creation and indexing.
/// All methods return `&'static str` to avoid runtime allocations and
/// enable compile-time string construction via [`const_format::concatcp!`].
///
/// # Design
///
/// This trait contains no I/O operations—it purely describes table
/// structure. Actual row access lives in each domain crate's repository.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Idempotently creates the table and indices for `T`.
///
/// Run once per entity at startup, before the server accepts traffic.
pub async fn ensure<T: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("ensuring schema for {}", T::name());
    client.batch_execute(T::creates()).await?;
    client.batch_execute(T::indices()).await?;
    Ok(())
}
