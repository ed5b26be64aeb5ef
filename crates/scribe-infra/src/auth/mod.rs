//! Token service implementation.

mod jwt;

pub use jwt::{JwtConfig, JwtTokenService};
