//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Each method executes a single parameterized statement; no operation spans multiple rows,
//! so no transactions are needed.

pub mod order;
pub mod restaurant;
pub mod visit;

#[cfg(test)]
mod test;
