//! Service layer for business logic and orchestration.
//!
//! Services sit above the data (repository) layer and below whatever
//! presentation layer the application mounts. They are responsible for:
//!
//! - **Business Logic**: Precondition checks and the error taxonomy callers see
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than entity models
//! - **Transaction Management**: The atomic register path and its retry loop

pub mod enrollment;

#[cfg(test)]
mod test;
