use super::*;
use crate::credentials::CredentialError;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use cod_core::Unique;
use std::sync::Arc;
use tokio_postgres::Client;

// Observed contract: invalid login answers 404, not 401.
fn bad_credentials() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "message": "Bad credentials",
        "status": false,
    }))
}

pub async fn signin(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<SigninRequest>,
) -> impl Responder {
    let account = match credentials::verify(db.get_ref(), &req.username, &req.password).await {
        Ok(account) => account,
        Err(CredentialError::Invalid) => return bad_credentials(),
        Err(CredentialError::Storage(e)) => {
            return HttpResponse::InternalServerError().body(e.to_string());
        }
    };
    let token = match tokens.issue(account.username(), Crypto::now()) {
        Ok(token) => token,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    HttpResponse::Ok()
        .cookie(session::grant(token.clone()))
        .json(ProfileResponse::with_token(&account, Some(token)))
}

pub async fn signup(db: web::Data<Arc<Client>>, req: web::Json<SignupRequest>) -> impl Responder {
    match db.username_taken(&req.username).await {
        Ok(false) => {}
        Ok(true) => return HttpResponse::BadRequest().body("Error: Username taken!"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    }
    match db.email_taken(&req.email).await {
        Ok(false) => {}
        Ok(true) => return HttpResponse::BadRequest().body("Error: Email taken!"),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    }
    match db.student_id_taken(&req.student_id).await {
        Ok(false) => {}
        Ok(true) => {
            return HttpResponse::BadRequest().body("Error: Student ID already registered!");
        }
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    }
    if let Err(reason) = validate::registration(&req) {
        return HttpResponse::BadRequest().body(reason.to_string());
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    match db.create(&req, &hashword).await {
        Ok(id) => {
            log::info!("registered account {} for {}", id, req.username);
            HttpResponse::Ok().body("Registration successful!")
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Username of the caller, or an empty body for anonymous requests.
/// Works on any request, so it reads the context rather than requiring it.
pub async fn username(context: Context) -> impl Responder {
    context
        .principal()
        .map(|principal| principal.username().to_string())
        .unwrap_or_default()
}

/// Full profile of the authenticated caller. A subject deleted since token
/// issuance reads as unauthenticated, not as a server error.
pub async fn profile(db: web::Data<Arc<Client>>, auth: Auth) -> impl Responder {
    match db.fetch(auth.principal().id()).await {
        Ok(Some(account)) => HttpResponse::Ok().json(ProfileResponse::new(&account)),
        Ok(None) => HttpResponse::Unauthorized().body(Deny::Unauthenticated.to_string()),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Stateless signout: nothing to invalidate server-side, just instruct the
/// client to drop its cookie.
pub async fn signout() -> impl Responder {
    HttpResponse::Ok()
        .cookie(session::revoke())
        .json(MessageResponse {
            message: "You've been signed out!".to_string(),
        })
}

pub async fn update_limited(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    req: web::Json<UpdateLimitedRequest>,
) -> impl Responder {
    let account = match db.fetch(auth.principal().id()).await {
        Ok(Some(account)) => account,
        Ok(None) => return HttpResponse::Unauthorized().body(Deny::Unauthenticated.to_string()),
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };
    let username = req
        .username
        .clone()
        .unwrap_or_else(|| account.username().to_string());
    let phone = req
        .phone
        .clone()
        .unwrap_or_else(|| account.phone().to_string());
    if username != account.username() {
        match db.username_taken(&username).await {
            Ok(false) => {}
            Ok(true) => return HttpResponse::BadRequest().body("Username already taken"),
            Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
        }
    }
    if let Err(e) = db.update_contact(account.id(), &username, &phone).await {
        return HttpResponse::InternalServerError().body(e.to_string());
    }
    match db.fetch(account.id()).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(ProfileResponse::new(&updated)),
        Ok(None) => HttpResponse::Unauthorized().body(Deny::Unauthenticated.to_string()),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
