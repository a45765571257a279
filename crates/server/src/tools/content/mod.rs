//! Content storage tools.
//!
//! Store text under its salted digest and read it back.

pub mod retrieve;
pub mod store;

pub use retrieve::{RetrieveContentParams, retrieve_impl};
pub use store::{StoreContentParams, store_impl};
