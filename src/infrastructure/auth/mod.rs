//! Admin credential verification

mod static_token;

pub use static_token::StaticTokenVerifier;
