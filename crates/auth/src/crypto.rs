use super::*;

const SESSION_TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(24 * 60 * 60);

/// JWT signing and verification with a symmetric process-wide secret.
///
/// Read-only after construction and safe for unsynchronized concurrent
/// reads, so one instance serves every worker. Expiry is checked against a
/// caller-supplied clock rather than the wall clock, which keeps
/// verification deterministic.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        // expiry is enforced in verify() against the caller's clock
        let mut validation = jsonwebtoken::Validation::default();
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
        }
    }
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set")
                .as_bytes(),
        )
    }
    /// Signs a token for `subject` issued at `now`, expiring after the
    /// configured duration. The signature covers the full payload,
    /// timestamps included.
    pub fn issue(&self, subject: &str, now: i64) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &Claims::new(subject, now),
            &self.encoding,
        )
    }
    /// Recomputes the signature (constant-time comparison inside the JWT
    /// backend) and then checks expiry against `now`. Structural failures
    /// surface as [`TokenError::Malformed`] before any signature check.
    pub fn verify(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let claims = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)?;
        match claims.expired(now) {
            true => Err(TokenError::Expired),
            false => Ok(claims),
        }
    }
    pub const fn duration() -> std::time::Duration {
        SESSION_TOKEN_DURATION
    }
    /// Current unix time in seconds.
    pub fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crypto() -> Crypto {
        Crypto::new(b"unit-test-secret")
    }

    #[test]
    fn issue_then_verify_returns_subject() {
        let crypto = crypto();
        let now = 1_700_000_000;
        let token = crypto.issue("alice", now).unwrap();
        let claims = crypto.verify(&token, now).unwrap();
        assert_eq!(claims.subject(), "alice");
    }

    #[test]
    fn verify_honors_the_expiry_window() {
        let crypto = crypto();
        let now = 1_700_000_000;
        let ttl = Crypto::duration().as_secs() as i64;
        let token = crypto.issue("alice", now).unwrap();
        assert!(crypto.verify(&token, now).is_ok());
        assert!(crypto.verify(&token, now + ttl).is_ok());
        assert_eq!(
            crypto.verify(&token, now + ttl + 1),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn tampered_payload_fails_signature_check() {
        let crypto = crypto();
        let token = crypto.issue("alice", 1_700_000_000).unwrap();
        let (header, rest) = token.split_once('.').unwrap();
        let (payload, signature) = rest.split_once('.').unwrap();
        // flip one character at a few positions across the payload
        for position in [0, payload.len() / 2, payload.len() - 1] {
            let mut bytes = payload.as_bytes().to_vec();
            bytes[position] = if bytes[position] == b'A' { b'B' } else { b'A' };
            let mutated = String::from_utf8(bytes).unwrap();
            let forged = format!("{}.{}.{}", header, mutated, signature);
            assert_eq!(
                crypto.verify(&forged, 1_700_000_000),
                Err(TokenError::SignatureMismatch),
                "payload byte {} went unnoticed",
                position
            );
        }
    }

    #[test]
    fn foreign_secret_fails_signature_check() {
        let ours = crypto();
        let theirs = Crypto::new(b"some-other-secret");
        let token = theirs.issue("alice", 1_700_000_000).unwrap();
        assert_eq!(
            ours.verify(&token, 1_700_000_000),
            Err(TokenError::SignatureMismatch)
        );
    }

    #[test]
    fn garbage_is_malformed_not_a_panic() {
        let crypto = crypto();
        for garbage in ["", "not-a-token", "a.b", "a.b.c.d", "ö.ü.ä"] {
            assert_eq!(
                crypto.verify(garbage, 1_700_000_000),
                Err(TokenError::Malformed)
            );
        }
    }
}
