use super::*;
use cod_core::ID;
use cod_core::Unique;
use std::collections::BTreeSet;

/// Registered marketplace account with verified institutional identity.
///
/// The password hash is a persistence-only detail and deliberately not part
/// of this type; it never travels with the account through the system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: ID<Self>,
    username: String,
    email: String,
    student_id: String,
    phone: String,
    department: String,
    verified: bool,
    roles: BTreeSet<Role>,
}

impl Account {
    pub fn new(
        id: ID<Self>,
        username: String,
        email: String,
        student_id: String,
        phone: String,
        department: String,
        verified: bool,
        roles: BTreeSet<Role>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            student_id,
            phone,
            department,
            verified,
            roles,
        }
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn student_id(&self) -> &str {
        &self.student_id
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
    pub fn department(&self) -> &str {
        &self.department
    }
    pub fn verified(&self) -> bool {
        self.verified
    }
    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }
    /// Role authority strings in canonical order, for responses and storage.
    pub fn authorities(&self) -> Vec<String> {
        self.roles
            .iter()
            .map(|role| role.authority().to_string())
            .collect()
    }
}

impl Unique for Account {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use cod_pg::*;

    /// Schema implementation for Account (users table).
    /// Note: hashword is a database-only field, not part of the Account
    /// domain type. Roles are stored flattened as authority strings.
    impl Schema for Account {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    user_id     BIGSERIAL PRIMARY KEY,
                    username    VARCHAR(20) UNIQUE NOT NULL,
                    email       VARCHAR(50) UNIQUE NOT NULL,
                    hashword    TEXT NOT NULL,
                    student_id  VARCHAR(10) UNIQUE NOT NULL,
                    phone       VARCHAR(12) NOT NULL,
                    department  VARCHAR(100) NOT NULL,
                    verified    BOOLEAN NOT NULL DEFAULT FALSE,
                    roles       TEXT[] NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_username ON ",
                USERS,
                " (username);
                 CREATE INDEX IF NOT EXISTS idx_users_email ON ",
                USERS,
                " (email);"
            )
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample(roles: &[Role]) -> Account {
        Account::new(
            ID::from(1),
            "jdoe".to_string(),
            "jdoe@binus.ac.id".to_string(),
            "2201234567".to_string(),
            "081234567890".to_string(),
            "Computer Science".to_string(),
            true,
            roles.iter().copied().collect(),
        )
    }

    #[test]
    fn authorities_are_canonical_and_ordered() {
        let account = sample(&[Role::Manager, Role::User]);
        assert_eq!(account.authorities(), vec!["ROLE_USER", "ROLE_MANAGER"]);
    }
}
