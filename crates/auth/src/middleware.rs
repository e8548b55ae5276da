use super::*;
use actix_web::FromRequest;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::body::EitherBody;
use actix_web::body::MessageBody;
use actix_web::dev::Payload;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::middleware::Next;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

/// Request authenticator: one stage in the middleware pipeline, run once
/// per request before route dispatch.
///
/// Resolves the session cookie into a [`Context`] and stashes it in the
/// request extensions. A rejected or absent token is not fatal here: the
/// request proceeds anonymously and the authorization gate decides
/// downstream. Only a storage failure during the identity lookup aborts
/// the request.
pub async fn authenticate(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<EitherBody<impl MessageBody + 'static>>, actix_web::Error> {
    let resolved = resolve(&req).await;
    match resolved {
        Ok(context) => {
            req.extensions_mut().insert(context);
            next.call(req).await.map(|res| res.map_into_left_body())
        }
        Err(e) => {
            log::error!("identity lookup failed: {}", e);
            let response = HttpResponse::InternalServerError().body("identity lookup failed");
            Ok(req.into_response(response).map_into_right_body())
        }
    }
}

/// Cookie -> claims -> account. Absent cookies, rejected tokens, and
/// subjects that vanished since issuance all resolve to the anonymous
/// context.
async fn resolve(req: &ServiceRequest) -> Result<Context, cod_pg::PgErr> {
    // an empty value is the client's own cleared cookie, same as absent
    let Some(cookie) = req
        .request()
        .cookie(session::SESSION_COOKIE)
        .filter(|cookie| !cookie.value().is_empty())
    else {
        return Ok(Context::anonymous());
    };
    let Some(crypto) = req.app_data::<web::Data<Crypto>>() else {
        log::error!("token service not configured");
        return Ok(Context::anonymous());
    };
    let claims = match crypto.verify(cookie.value(), Crypto::now()) {
        Ok(claims) => claims,
        Err(e) => {
            log::debug!("rejected session token: {}", e);
            return Ok(Context::anonymous());
        }
    };
    let Some(db) = req.app_data::<web::Data<Arc<Client>>>() else {
        log::error!("database not configured");
        return Ok(Context::anonymous());
    };
    match db.lookup(claims.subject()).await? {
        Some((account, _)) => Ok(Context::from(&account)),
        None => Ok(Context::anonymous()),
    }
}

/// Handlers receive the security context populated by [`authenticate`];
/// requests that never passed through the authenticator read as anonymous.
impl FromRequest for Context {
    type Error = actix_web::Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Ok(req
            .extensions()
            .get::<Context>()
            .cloned()
            .unwrap_or_default()))
    }
}

/// Extractor for routes that require an authenticated caller, whatever the
/// role. Anonymous requests are rejected with 401 before the handler runs.
pub struct Auth(pub Principal);

impl Auth {
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(
            req.extensions()
                .get::<Context>()
                .and_then(|context| context.principal().cloned())
                .map(Auth)
                .ok_or_else(|| {
                    actix_web::error::ErrorUnauthorized(Deny::Unauthenticated.to_string())
                }),
        )
    }
}
