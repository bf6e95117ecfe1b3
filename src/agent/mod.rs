//! Conversation loop for Drafter
//!
//! This module contains the session state machine, the transcript, and
//! the operator input sources.

pub mod input;
pub mod session;
pub mod transcript;

pub use input::{OperatorInput, RustylineInput, ScriptedInput};
pub use session::{DraftSession, Phase};
pub use transcript::{Continuation, Transcript};
