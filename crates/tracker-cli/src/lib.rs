//! CLI library components for the tracker enrollment validator.

#![allow(missing_docs)]

pub mod fixture;
pub mod logging;
