//! Role-based authorization decisions.
//!
//! Routes declare their required roles in the server's route table; the
//! gate evaluates the declaration against the request's security context.
//! An unauthenticated request to a protected route is distinguished from
//! an authenticated one lacking the role.
use super::*;

/// Allow when `required` is empty (public route) or the context's role set
/// intersects it.
pub fn check(context: &Context, required: &[Role]) -> Result<(), Deny> {
    if required.is_empty() {
        return Ok(());
    }
    match context.principal() {
        None => Err(Deny::Unauthenticated),
        Some(_) if context.holds_any(required) => Ok(()),
        Some(_) => Err(Deny::Forbidden),
    }
}

#[cfg(feature = "server")]
mod middleware {
    use super::*;
    use actix_web::HttpMessage;
    use actix_web::HttpResponse;
    use actix_web::body::EitherBody;
    use actix_web::body::MessageBody;
    use actix_web::dev::ServiceRequest;
    use actix_web::dev::ServiceResponse;
    use actix_web::middleware::Next;

    /// Middleware adapter over [`check`], for declaring required roles on a
    /// scope or resource:
    ///
    /// ```ignore
    /// web::scope("/api/admin")
    ///     .wrap(from_fn(|req, next| gate::enforce(&[Role::Admin], req, next)))
    /// ```
    pub async fn enforce(
        required: &'static [Role],
        req: ServiceRequest,
        next: Next<impl MessageBody + 'static>,
    ) -> Result<ServiceResponse<EitherBody<impl MessageBody + 'static>>, actix_web::Error> {
        let context = req.extensions().get::<Context>().cloned().unwrap_or_default();
        match check(&context, required) {
            Ok(()) => next.call(req).await.map(|res| res.map_into_left_body()),
            Err(deny) => {
                let response = match deny {
                    Deny::Unauthenticated => HttpResponse::Unauthorized(),
                    Deny::Forbidden => HttpResponse::Forbidden(),
                }
                .json(MessageResponse {
                    message: deny.to_string(),
                });
                Ok(req.into_response(response).map_into_right_body())
            }
        }
    }
}
#[cfg(feature = "server")]
pub use middleware::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::tests::sample;

    #[test]
    fn public_routes_allow_everyone() {
        assert_eq!(check(&Context::anonymous(), &[]), Ok(()));
        let user = Context::from(&sample(&[Role::User]));
        assert_eq!(check(&user, &[]), Ok(()));
    }

    #[test]
    fn anonymous_requests_are_unauthenticated_not_forbidden() {
        assert_eq!(
            check(&Context::anonymous(), &[Role::Manager]),
            Err(Deny::Unauthenticated)
        );
    }

    #[test]
    fn missing_role_is_forbidden() {
        let user = Context::from(&sample(&[Role::User]));
        assert_eq!(check(&user, &[Role::Manager]), Err(Deny::Forbidden));
        assert_eq!(check(&user, &[Role::Admin, Role::Manager]), Err(Deny::Forbidden));
    }

    #[test]
    fn any_intersecting_role_allows() {
        let staff = Context::from(&sample(&[Role::User, Role::Manager]));
        assert_eq!(check(&staff, &[Role::Manager]), Ok(()));
        assert_eq!(check(&staff, &[Role::Admin, Role::Manager]), Ok(()));
    }
}
