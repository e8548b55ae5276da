use super::*;
use cod_core::ID;
use cod_pg::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio_postgres::Client;

/// Repository trait for account persistence.
///
/// Abstracts SQL from the auth core. Every lookup is fallible and
/// possibly-absent; callers never assume a row exists.
#[allow(async_fn_in_trait)]
pub trait AccountRepository {
    /// Account plus stored password hash, by username.
    async fn lookup(&self, username: &str) -> Result<Option<(Account, String)>, PgErr>;
    async fn fetch(&self, id: ID<Account>) -> Result<Option<Account>, PgErr>;
    async fn username_taken(&self, username: &str) -> Result<bool, PgErr>;
    async fn email_taken(&self, email: &str) -> Result<bool, PgErr>;
    async fn student_id_taken(&self, student_id: &str) -> Result<bool, PgErr>;
    /// Inserts a validated registration; the database assigns the id.
    /// New accounts get the default role and are auto-verified.
    async fn create(&self, signup: &SignupRequest, hashword: &str) -> Result<ID<Account>, PgErr>;
    async fn update_contact(
        &self,
        id: ID<Account>,
        username: &str,
        phone: &str,
    ) -> Result<(), PgErr>;
}

const COLUMNS: &str = "user_id, username, email, student_id, phone, department, verified, roles";

fn hydrate(row: &tokio_postgres::Row) -> Account {
    let roles = row
        .get::<_, Vec<String>>(7)
        .iter()
        .filter_map(|label| Role::try_from(label.as_str()).ok())
        .collect::<BTreeSet<_>>();
    Account::new(
        ID::from(row.get::<_, i64>(0)),
        row.get::<_, String>(1),
        row.get::<_, String>(2),
        row.get::<_, String>(3),
        row.get::<_, String>(4),
        row.get::<_, String>(5),
        row.get::<_, bool>(6),
        roles,
    )
}

impl AccountRepository for Arc<Client> {
    async fn lookup(&self, username: &str) -> Result<Option<(Account, String)>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT ",
                COLUMNS,
                ", hashword FROM ",
                USERS,
                " WHERE username = $1"
            ),
            &[&username],
        )
        .await
        .map(|opt| opt.map(|row| (hydrate(&row), row.get::<_, String>(8))))
    }

    async fn fetch(&self, id: ID<Account>) -> Result<Option<Account>, PgErr> {
        self.query_opt(
            const_format::concatcp!("SELECT ", COLUMNS, " FROM ", USERS, " WHERE user_id = $1"),
            &[&id.inner()],
        )
        .await
        .map(|opt| opt.map(|row| hydrate(&row)))
    }

    async fn username_taken(&self, username: &str) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!("SELECT 1 FROM ", USERS, " WHERE username = $1"),
            &[&username],
        )
        .await
        .map(|opt| opt.is_some())
    }

    async fn email_taken(&self, email: &str) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!("SELECT 1 FROM ", USERS, " WHERE email = $1"),
            &[&email],
        )
        .await
        .map(|opt| opt.is_some())
    }

    async fn student_id_taken(&self, student_id: &str) -> Result<bool, PgErr> {
        self.query_opt(
            const_format::concatcp!("SELECT 1 FROM ", USERS, " WHERE student_id = $1"),
            &[&student_id],
        )
        .await
        .map(|opt| opt.is_some())
    }

    async fn create(&self, signup: &SignupRequest, hashword: &str) -> Result<ID<Account>, PgErr> {
        let roles = vec![Role::User.authority().to_string()];
        self.query_one(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (username, email, hashword, student_id, phone, department, verified, roles)
                 VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7) RETURNING user_id"
            ),
            &[
                &signup.username,
                &signup.email,
                &hashword,
                &signup.student_id,
                &signup.phone,
                &signup.department,
                &roles,
            ],
        )
        .await
        .map(|row| ID::from(row.get::<_, i64>(0)))
    }

    async fn update_contact(
        &self,
        id: ID<Account>,
        username: &str,
        phone: &str,
    ) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                USERS,
                " SET username = $2, phone = $3 WHERE user_id = $1"
            ),
            &[&id.inner(), &username, &phone],
        )
        .await
        .map(|_| ())
    }
}
