//! `printerp-graphql` — typed GraphQL query contracts.
//!
//! Each query pairs a [`QueryDocument`] (selection tree rendered to the wire
//! string) with a typed response. Transport and caching are left to the
//! calling client.

pub mod customer_me;
pub mod document;
pub mod error;
pub mod registry;
pub mod runtime_health;
pub mod wire;

pub use customer_me::{CUSTOMER_ME, CustomerMe, CustomerMeData, CustomerMeUser, CustomerSummary};
pub use document::{Field, GraphQlQuery, NoVariables, QueryDocument};
pub use error::QueryError;
pub use registry::{QueryRegistry, QueryStatus};
pub use wire::{GraphQlError, GraphQlRequest, GraphQlResponse, decode_response};
