//! Repository Layer
//!
//! Remote data access abstractions and implementations.

mod traits;
mod queries;
mod graphql;

#[cfg(test)]
pub mod fake;

pub use traits::ContactRepository;
pub use graphql::GraphqlContactRepository;
