//! Library half of `marqueectl`: process bootstrap and the script replayer,
//! exposed so integration tests can drive them without spawning the binary.
#![allow(missing_docs)]

pub mod bootstrap;
pub mod replay;
pub mod script;

pub use replay::{ReplaySummary, Replayer, StepOutcome, StepReport};
pub use script::{ScriptError, ScriptLine, Step, parse_script};
