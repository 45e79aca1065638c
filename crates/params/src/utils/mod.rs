//! Grouped constants

pub mod symmetric;
