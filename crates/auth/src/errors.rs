use super::*;

/// Why a presented session token was rejected.
///
/// All three collapse to "no authenticated identity" during request
/// processing; none of them aborts the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Structural decoding failed before the signature was even checked.
    #[error("malformed token")]
    Malformed,
    /// Recomputed signature does not match the embedded one.
    #[error("token signature mismatch")]
    SignatureMismatch,
    /// Signature checks out but the expiry has passed.
    #[error("token expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidSignature => Self::SignatureMismatch,
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

/// Authorization decision against a populated (or empty) security context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Deny {
    /// Protected route, no identity on the request.
    #[error("authentication required")]
    Unauthenticated,
    /// Identity present but none of the required roles held.
    #[error("access forbidden")]
    Forbidden,
}

/// Registration input failures, one per identity rule.
///
/// Messages are surfaced verbatim to the caller, so they stay human-readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email must be a valid @binus.ac.id address")]
    InvalidEmailDomain,
    #[error("Student ID must start with 2 and be 10 digits total")]
    InvalidStudentId,
    #[error("Phone must start with 08 and be 10-12 digits")]
    InvalidPhone,
    #[error("Username must be 3-20 characters")]
    InvalidUsername,
    #[error("Password must be 6-40 characters")]
    InvalidPassword,
}
