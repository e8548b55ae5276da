use super::*;
use cod_core::ID;
use cod_core::Unique;
use std::collections::BTreeSet;

/// Identity resolved for the current request: account id, username, and
/// the roles held at resolution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    id: ID<Account>,
    username: String,
    roles: BTreeSet<Role>,
}

impl Principal {
    pub fn new(id: ID<Account>, username: String, roles: BTreeSet<Role>) -> Self {
        Self {
            id,
            username,
            roles,
        }
    }
    pub fn id(&self) -> ID<Account> {
        self.id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }
}

impl From<&Account> for Principal {
    fn from(account: &Account) -> Self {
        Self::new(
            account.id(),
            account.username().to_string(),
            account.roles().clone(),
        )
    }
}

/// Per-request security context: anonymous, or an authenticated principal.
///
/// Derived and transient. Each request gets its own instance for its own
/// lifetime; nothing here is shared across requests or persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context(Option<Principal>);

impl Context {
    pub fn anonymous() -> Self {
        Self(None)
    }
    pub fn authenticated(principal: Principal) -> Self {
        Self(Some(principal))
    }
    pub fn principal(&self) -> Option<&Principal> {
        self.0.as_ref()
    }
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
    /// True when the context holds at least one of `roles`.
    pub fn holds_any(&self, roles: &[Role]) -> bool {
        self.principal()
            .map(|p| roles.iter().any(|role| p.roles().contains(role)))
            .unwrap_or(false)
    }
}

impl From<&Account> for Context {
    fn from(account: &Account) -> Self {
        Self::authenticated(Principal::from(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::tests::sample;

    #[test]
    fn anonymous_context_holds_nothing() {
        let context = Context::anonymous();
        assert!(!context.is_authenticated());
        assert!(!context.holds_any(&[Role::User]));
        assert!(context.principal().is_none());
    }

    #[test]
    fn context_reflects_the_account() {
        let account = sample(&[Role::User, Role::Admin]);
        let context = Context::from(&account);
        assert!(context.is_authenticated());
        assert_eq!(context.principal().unwrap().username(), "jdoe");
        assert!(context.holds_any(&[Role::Admin]));
        assert!(context.holds_any(&[Role::Manager, Role::User]));
        assert!(!context.holds_any(&[Role::Manager]));
    }
}
