//! Library half of the `quickactions` binary, kept separate so the
//! integration tests can drive configuration and rendering directly.

pub mod config;
pub mod selection;
