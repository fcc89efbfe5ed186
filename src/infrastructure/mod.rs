//! Infrastructure layer - Implementations behind the domain traits

pub mod auth;
pub mod inference;
pub mod logging;
pub mod observability;
