//! HTTP handlers exposing the intake API.

pub mod intake;
