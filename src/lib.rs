//! Capacity-bounded enrollment core for a course catalog.
//!
//! This crate implements the registration workflow of a course -> module ->
//! instructor -> enrollment system: a user claims a seat in a module with a
//! fixed capacity, and the service guarantees that the seat count never
//! exceeds capacity and that no user holds two enrollments in the same
//! module, even under concurrent registration attempts.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Business logic orchestration: the
//!   register transaction and enrollment listing
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain
//!   model conversion
//! - **Model Layer** (`model/`) - Domain models converted from entity models
//!   at the repository boundary
//! - **Error Layer** (`error`) - Application error taxonomy
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection and migration runner
//!
//! # Boundaries
//!
//! HTTP routing, request parsing, and authentication are not part of this
//! crate; a presentation layer calls [`service::enrollment::EnrollmentService`]
//! and maps its results and error kinds onto its own wire format. The user
//! directory and the module/course/instructor catalog are consumed read-only;
//! the only write this crate performs outside its own enrollment table is the
//! seat-count increment on `module`, and only through the atomic register
//! path.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
