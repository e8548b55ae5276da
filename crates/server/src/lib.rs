//! Campus Marketplace Backend Server
//!
//! Composes the authentication core and the pickup-location directory into
//! a single actix-web server behind an explicit middleware pipeline:
//! request logging, CORS, then the request authenticator. Role requirements
//! are declared per scope in the route table below and evaluated by the
//! authorization gate.

mod greetings;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::middleware::from_fn;
use actix_web::web;
use cod_auth::Role;
use cod_auth::gate;
use std::sync::Arc;
use tokio_postgres::Client;

/// Required-role sets consulted by the authorization gate, per route scope.
const USER: &[Role] = &[Role::User];
const ADMIN: &[Role] = &[Role::Admin];
const MANAGER: &[Role] = &[Role::Manager];

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let client = cod_pg::db().await;
    cod_pg::ensure::<cod_auth::Account>(&client).await.expect("users schema");
    cod_pg::ensure::<cod_locations::Location>(&client).await.expect("locations schema");
    let crypto = web::Data::new(cod_auth::Crypto::from_env());
    let client = web::Data::new(client);
    log::info!("starting marketplace server");
    HttpServer::new(move || {
        App::new()
            .wrap(from_fn(cod_auth::authenticate))
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(client.clone())
            .route("/health", web::get().to(health))
            .route("/hello", web::get().to(greetings::hello))
            .service(
                web::resource("/user")
                    .wrap(from_fn(|req, next| gate::enforce(USER, req, next)))
                    .route(web::get().to(greetings::user)),
            )
            .service(
                web::resource("/admin")
                    .wrap(from_fn(|req, next| gate::enforce(ADMIN, req, next)))
                    .route(web::get().to(greetings::admin)),
            )
            .service(
                web::resource("/manager")
                    .wrap(from_fn(|req, next| gate::enforce(MANAGER, req, next)))
                    .route(web::get().to(greetings::manager)),
            )
            .service(
                web::scope("/auth")
                    .route("/signin", web::post().to(cod_auth::signin))
                    .route("/signup", web::post().to(cod_auth::signup))
                    .route("/signout", web::post().to(cod_auth::signout))
                    .route("/username", web::get().to(cod_auth::username))
                    .route("/user", web::get().to(cod_auth::profile))
                    .route("/user/update-limited", web::put().to(cod_auth::update_limited)),
            )
            .service(
                web::scope("/api")
                    .route("/cod-locations", web::get().to(cod_locations::index))
                    .service(
                        web::scope("/admin")
                            .wrap(from_fn(|req, next| gate::enforce(ADMIN, req, next)))
                            .route("/cod-locations", web::post().to(cod_locations::add))
                            .route("/cod-locations/{id}/status", web::put().to(cod_locations::set_status)),
                    ),
            )
    })
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}
