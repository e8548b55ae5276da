use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use cod_core::ID;
use serde::Deserialize;
use std::sync::Arc;
use tokio_postgres::Client;

pub async fn index(db: web::Data<Arc<Client>>) -> impl Responder {
    match db.active().await {
        Ok(locations) => {
            HttpResponse::Ok().json(locations.iter().map(LocationInfo::from).collect::<Vec<_>>())
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

pub async fn add(db: web::Data<Arc<Client>>, req: web::Json<NewLocation>) -> impl Responder {
    if !(3..=100).contains(&req.name.chars().count()) {
        return HttpResponse::BadRequest()
            .body("Location name must be between 3 and 100 characters");
    }
    if req.building.trim().is_empty() {
        return HttpResponse::BadRequest().body("Building name cannot be blank");
    }
    if req.description.trim().is_empty() || req.description.chars().count() > 500 {
        return HttpResponse::BadRequest()
            .body("Description cannot be blank or exceed 500 characters");
    }
    match db.insert(&req).await {
        Ok(location) => HttpResponse::Ok().json(LocationInfo::from(&location)),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

#[derive(Deserialize)]
pub struct StatusQuery {
    pub active: bool,
}

pub async fn set_status(
    db: web::Data<Arc<Client>>,
    path: web::Path<i64>,
    query: web::Query<StatusQuery>,
) -> impl Responder {
    let id: ID<Location> = ID::from(path.into_inner());
    match db.set_active(id, query.active).await {
        Ok(Some(location)) => HttpResponse::Ok().json(LocationInfo::from(&location)),
        Ok(None) => HttpResponse::NotFound().body(format!("Location not found with ID: {}", id)),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}
