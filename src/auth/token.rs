//! Bearer token value and requested lifetime.

pub mod secret;
pub mod ttl;
