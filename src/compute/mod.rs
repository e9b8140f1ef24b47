//! Shared precondition checks for the public operations.
//!
//! Every entry point validates its inputs here before any bit is computed, so
//! the encoding loops themselves can assume in-domain values.

pub mod validation;
