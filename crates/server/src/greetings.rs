//! Role-check smoke routes, one per role tier.
use actix_web::Responder;

pub async fn hello() -> impl Responder {
    "Hello"
}
pub async fn user() -> impl Responder {
    "Hello, User"
}
pub async fn admin() -> impl Responder {
    "Hello, Admin"
}
pub async fn manager() -> impl Responder {
    "Hello, Manager"
}
