//! Typed model of the accounting platform's Bank Transaction resource.
//!
//! [`models`] holds the resource and its nested objects, [`remote`] the descriptor traits and the
//! JSON envelope codec a transport builds on, and [`types`] the shared value types.

pub mod models;
pub mod remote;
pub mod types;
