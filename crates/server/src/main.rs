//! Campus marketplace backend binary.
//!
//! Boots dual logging and runs the HTTP server.

#[tokio::main]
async fn main() {
    cod_core::log();
    cod_server::run().await.unwrap();
}
