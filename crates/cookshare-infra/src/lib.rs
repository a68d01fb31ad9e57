//! Infrastructure adapters for CookShare.
//!
//! Everything here implements a port from `cookshare-core` against a
//! real facility: the filesystem for the recipe slot, the system clock,
//! and a logging stand-in for the narration device.

pub mod fs;
pub mod speech;
pub mod time;

pub use fs::{app_data_dir, JsonRecipeSlotStore};
pub use speech::LoggingNarrator;
pub use time::SystemClock;
