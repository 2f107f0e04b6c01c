//! Contentful GraphQL client and queries

mod client;
mod queries;

pub use client::*;
pub use queries::*;
