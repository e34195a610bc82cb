//! DTOs shaped for the intake API responses.

pub mod intake;
