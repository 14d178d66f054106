//! Brewfather API access
//!
//! - `transport` - raw authenticated GET/PATCH over reqwest
//! - `client` - typed operations, pagination and validation
//! - `query` - list endpoint query parameters
//! - `debug` - response capture in debug mode

pub mod client;
pub mod debug;
pub mod error;
pub mod query;
pub mod transport;

#[cfg(test)]
pub(crate) mod stub;

pub use client::{BatchWithRecipe, BrewfatherClient};
pub use debug::DebugRecorder;
pub use error::ApiError;
pub use query::{ListQuery, OrderDirection};
pub use transport::{ApiTransport, HttpTransport};
