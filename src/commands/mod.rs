//! Command implementations for the next-salvage CLI

pub mod recover;
