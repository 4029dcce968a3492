//! Service-account identity, JWT assertions, token acquisition, and permission roles.

pub mod assertion;
pub mod identity;
pub mod manager;
pub mod role;
pub mod token;

pub use assertion::*;
pub use identity::*;
pub use manager::*;
pub use role::*;
pub use token::{secret::*, ttl::*};
