//! Vitrine API: HTTP surface for image uploads, item deletion, and listing.
//!
//! Exposed as a library so integration tests can build the router the same
//! way the binary does.

pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod utils;
