//! Command handlers.

pub mod traces;
