//! Domain models for next-salvage
//!
//! Plain values passed between the recovery passes: compiled inputs,
//! recovered outputs and the counters reported at the end of a run.

pub mod bundle;
pub mod recovered;

pub use bundle::CompiledBundle;
pub use recovered::{RecoveredFile, RecoveryStats, SourceKind, StylesheetSection};
