//! Entity factories for tests.
//!
//! Each factory creates one entity kind with sensible defaults that can be
//! overridden through a builder pattern, plus `create_*` shorthands for the
//! common case. `helpers` wires whole dependency chains (course + instructor
//! + module) in one call.

pub mod course;
pub mod enrollment;
pub mod helpers;
pub mod instructor;
pub mod module;
pub mod user;
