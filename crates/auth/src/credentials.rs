//! Credential verification against stored hashes.
use super::*;

/// Credential check failure. An unknown username and a wrong password
/// collapse into the same variant so responses never reveal which field
/// was wrong.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Bad credentials")]
    Invalid,
    #[error(transparent)]
    Storage(#[from] cod_pg::PgErr),
}

/// Checks a submitted username/password pair against the stored hash and
/// returns the matching account.
pub async fn verify<R>(db: &R, username: &str, secret: &str) -> Result<Account, CredentialError>
where
    R: AccountRepository,
{
    let (account, hashword) = db
        .lookup(username)
        .await?
        .ok_or(CredentialError::Invalid)?;
    match password::verify(secret, &hashword) {
        true => Ok(account),
        false => Err(CredentialError::Invalid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::tests::sample;
    use cod_core::ID;

    /// In-memory stand-in for the persistence collaborator.
    struct OneUser {
        account: Account,
        hashword: String,
    }

    impl AccountRepository for OneUser {
        async fn lookup(&self, username: &str) -> Result<Option<(Account, String)>, cod_pg::PgErr> {
            Ok((username == self.account.username())
                .then(|| (self.account.clone(), self.hashword.clone())))
        }
        async fn fetch(&self, _: ID<Account>) -> Result<Option<Account>, cod_pg::PgErr> {
            Ok(Some(self.account.clone()))
        }
        async fn username_taken(&self, _: &str) -> Result<bool, cod_pg::PgErr> {
            Ok(false)
        }
        async fn email_taken(&self, _: &str) -> Result<bool, cod_pg::PgErr> {
            Ok(false)
        }
        async fn student_id_taken(&self, _: &str) -> Result<bool, cod_pg::PgErr> {
            Ok(false)
        }
        async fn create(
            &self,
            _: &SignupRequest,
            _: &str,
        ) -> Result<ID<Account>, cod_pg::PgErr> {
            Ok(ID::from(1))
        }
        async fn update_contact(
            &self,
            _: ID<Account>,
            _: &str,
            _: &str,
        ) -> Result<(), cod_pg::PgErr> {
            Ok(())
        }
    }

    fn repo() -> OneUser {
        OneUser {
            account: sample(&[Role::User]),
            hashword: password::hash("hunter22").unwrap(),
        }
    }

    #[tokio::test]
    async fn correct_pair_returns_the_account() {
        let account = verify(&repo(), "jdoe", "hunter22").await.unwrap();
        assert_eq!(account.username(), "jdoe");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let repo = repo();
        let wrong_password = verify(&repo, "jdoe", "hunter23").await.unwrap_err();
        let unknown_user = verify(&repo, "nobody", "hunter22").await.unwrap_err();
        assert_eq!(wrong_password.to_string(), "Bad credentials");
        assert_eq!(unknown_user.to_string(), wrong_password.to_string());
    }
}
