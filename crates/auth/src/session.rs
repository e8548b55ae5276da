//! Session cookie issuance. The cookie is the only place the signed token
//! lives; there is no server-side session record to create or destroy.
use super::*;
use actix_web::cookie::Cookie;
use actix_web::cookie::SameSite;
use actix_web::cookie::time::Duration;

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "cod-session";

/// Wraps a freshly issued token in the session cookie: application-wide
/// path, inaccessible to page scripts, same-site restricted, expiring
/// together with the token.
pub fn grant(token: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(Crypto::duration().as_secs() as i64))
        .finish()
}

/// Clearing cookie: same name and path, empty value, immediate expiry.
/// Instructs the client to discard its token; the server keeps no record.
pub fn revoke() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_cookie_attributes() {
        let cookie = grant("token-value".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(
            cookie.max_age(),
            Some(Duration::seconds(Crypto::duration().as_secs() as i64))
        );
    }

    #[test]
    fn revoked_cookie_expires_immediately() {
        let cookie = revoke();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
