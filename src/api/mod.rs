//! HTTP API layer

pub mod admin;
pub mod health;
pub mod middleware;
pub mod pages;
pub mod predict;
pub mod router;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use router::create_router;
pub use state::AppState;
