//! Cash-on-delivery pickup location directory.
//!
//! Plain catalog data: campus spots where buyer and seller meet to exchange
//! goods for cash. Browsing is public; curation is an admin concern wired
//! up by the server's route table.
mod dto;
mod model;

pub use dto::*;
pub use model::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
