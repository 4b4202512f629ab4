//! Database repository layer for the enrollment domain.
//!
//! This module contains repository structs that handle database operations
//! for each entity the service touches. Repositories use SeaORM entity
//! models internally and return domain models to maintain separation between
//! the data layer and business logic layer. They are generic over the
//! connection so the same code runs on the pooled connection for reads and
//! inside the register transaction for the seat-claim-and-insert pair.

pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod module;
pub mod user;

#[cfg(test)]
mod test;
