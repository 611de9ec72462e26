//! HTTP request handlers.
//!
//! One handler per route. Each handler parses and validates its input, runs the
//! ownership guard where the route mutates a visit, then performs a single service
//! call and serializes the result.

pub mod order;
pub mod restaurant;
pub mod status;
pub mod visit;
