use super::*;
use cod_core::ID;
use cod_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Repository trait for pickup-location persistence.
#[allow(async_fn_in_trait)]
pub trait LocationRepository {
    /// Active locations only; deactivated spots stay out of the directory.
    async fn active(&self) -> Result<Vec<Location>, PgErr>;
    async fn insert(&self, location: &NewLocation) -> Result<Location, PgErr>;
    /// Flips the availability flag; `None` when the id does not exist.
    async fn set_active(&self, id: ID<Location>, active: bool) -> Result<Option<Location>, PgErr>;
}

const COLUMNS: &str = "id, name, building, floor, description, active";

fn hydrate(row: &tokio_postgres::Row) -> Location {
    Location::new(
        ID::from(row.get::<_, i64>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        row.get::<_, Option<String>>(3),
        row.get::<_, String>(4),
        row.get::<_, bool>(5),
    )
}

impl LocationRepository for Arc<Client> {
    async fn active(&self) -> Result<Vec<Location>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT ",
                COLUMNS,
                " FROM ",
                LOCATIONS,
                " WHERE active ORDER BY id"
            ),
            &[],
        )
        .await
        .map(|rows| rows.iter().map(hydrate).collect())
    }

    async fn insert(&self, location: &NewLocation) -> Result<Location, PgErr> {
        self.query_one(
            const_format::concatcp!(
                "INSERT INTO ",
                LOCATIONS,
                " (name, building, floor, description, active)
                 VALUES ($1, $2, $3, $4, $5) RETURNING ",
                COLUMNS
            ),
            &[
                &location.name,
                &location.building,
                &location.floor,
                &location.description,
                &location.active,
            ],
        )
        .await
        .map(|row| hydrate(&row))
    }

    async fn set_active(&self, id: ID<Location>, active: bool) -> Result<Option<Location>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "UPDATE ",
                LOCATIONS,
                " SET active = $2 WHERE id = $1 RETURNING ",
                COLUMNS
            ),
            &[&id.inner(), &active],
        )
        .await
        .map(|opt| opt.map(|row| hydrate(&row)))
    }
}
