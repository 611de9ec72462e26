//! Domain models, request/response DTOs, and operation parameter types.
//!
//! Each domain module holds its wire-level DTOs (serde + utoipa schemas), the domain
//! model used by the service and data layers, and the parameter types for mutating
//! operations. Conversion happens at the layer boundaries: `from_dto` validates and
//! parses client input, `from_entity` converts database rows, `into_dto` shapes
//! responses.

pub mod api;
pub mod order;
pub mod restaurant;
pub mod visit;
