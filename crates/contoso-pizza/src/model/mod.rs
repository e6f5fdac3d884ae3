//! The pizza record and its create/update payloads.
//!
//! The store integration lives in [`crate::pizza_actor::entity`].

pub mod pizza;

pub use pizza::*;
