//! `printerp-auth` — authentication boundary.
//!
//! Turns bearer tokens into verified claims (tenant, principal, roles).
//! Decoupled from HTTP; the API crate wires it into middleware.

pub mod claims;
pub mod jwt;
pub mod principal;
pub mod roles;

pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use jwt::{Hs256JwtValidator, JwtValidator, TokenError};
pub use principal::PrincipalId;
pub use roles::Role;
