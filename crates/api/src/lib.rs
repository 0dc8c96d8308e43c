//! Webtoon collection API server library.
//!
//! Exposes the building blocks (config, state, error handling, payloads,
//! routes, thumbnail proxy) so integration tests and the binary entrypoint
//! can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod payload;
pub mod response;
pub mod routes;
pub mod state;
pub mod thumbnail;
