//! Port interfaces for the application layer.
//!
//! Ports define the contract between the core business logic and the
//! infrastructure implementations, keeping the domain independent of
//! storage technology, audio devices and wall clocks.

mod clock;
mod narrator;
mod storage;

pub use clock::ClockPort;
pub use narrator::{NarrationFinishedRx, NarrationFinishedTx, NarratorPort};
pub use storage::RecipeSlotPort;
