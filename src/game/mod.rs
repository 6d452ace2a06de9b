// Session engine: board dealing, per-game state, long-poll wake-ups and the registry.

pub mod board;
pub mod registry;
pub mod session;
pub mod signal;

pub use board::BoardGenerator;
pub use registry::{GameRegistry, SweepPolicy, Target};
