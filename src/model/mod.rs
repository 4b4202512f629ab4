//! Domain models for the enrollment core.
//!
//! This module contains domain models used throughout the service layer,
//! representing business entities. Domain models are converted from entity
//! models at the repository boundary. The enrollment detail record carries
//! serde derives because it is the record handed to the (external)
//! presentation layer.

pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod module;
