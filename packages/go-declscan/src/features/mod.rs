//! Feature slices

pub mod classify;
pub mod parsing;
