use super::*;

/// Access role from the fixed closed set. Every account holds at least one
/// role; registration assigns exactly [`Role::User`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    User,
    Admin,
    Manager,
}

impl Role {
    /// All roles in canonical order.
    pub const fn all() -> [Role; 3] {
        [Role::User, Role::Admin, Role::Manager]
    }
    /// Authority string as it appears in responses and the roles column.
    pub const fn authority(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
            Role::Manager => "ROLE_MANAGER",
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Role {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "USER" | "ROLE_USER" => Ok(Role::User),
            "ADMIN" | "ROLE_ADMIN" => Ok(Role::Admin),
            "MANAGER" | "ROLE_MANAGER" => Ok(Role::Manager),
            _ => Err(format!("invalid role str: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.authority())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_roundtrips_through_parse() {
        for role in Role::all() {
            assert_eq!(Role::try_from(role.authority()), Ok(role));
        }
    }

    #[test]
    fn bare_names_parse_case_insensitively() {
        assert_eq!(Role::try_from("user"), Ok(Role::User));
        assert_eq!(Role::try_from(" Manager "), Ok(Role::Manager));
        assert_eq!(Role::try_from("role_admin"), Ok(Role::Admin));
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!(Role::try_from("ROOT").is_err());
        assert!(Role::try_from("").is_err());
    }

    #[test]
    fn displays_as_authority() {
        assert_eq!(Role::User.to_string(), "ROLE_USER");
    }
}
