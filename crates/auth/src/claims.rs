use super::*;

/// Signed session token payload: subject username, issuance and expiry
/// timestamps (unix seconds). Immutable once issued and never persisted;
/// validity is entirely a function of signature and expiry.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: &str, now: i64) -> Self {
        Self {
            sub: subject.to_string(),
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    /// Tokens are valid through the full closed interval `[iat, exp]`.
    pub fn expired(&self, now: i64) -> bool {
        now > self.exp
    }
    pub fn subject(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_carry_subject_and_window() {
        let claims = Claims::new("alice", 1_000);
        assert_eq!(claims.subject(), "alice");
        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp, 1_000 + Crypto::duration().as_secs() as i64);
    }

    #[test]
    fn expiry_interval_is_closed() {
        let claims = Claims::new("alice", 1_000);
        assert!(!claims.expired(1_000));
        assert!(!claims.expired(claims.exp));
        assert!(claims.expired(claims.exp + 1));
    }
}
