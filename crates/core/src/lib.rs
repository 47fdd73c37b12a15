//! Domain logic for staff record validation.
//!
//! Pure types and rule evaluation, no HTTP or I/O. The API crate
//! deserializes requests into [`staff::StaffPerson`] and hands them to
//! [`validation::evaluator::validate_staff_person`].

pub mod error;
pub mod staff;
pub mod validation;
